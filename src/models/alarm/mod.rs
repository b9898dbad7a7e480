// Alarm module
// Sunrise alarm model: wake time on a 12-hour clock, recurrence days,
// and the immutable configuration snapshot handed to the save callback

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::catalog::Catalogs;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Errors reported by the alarm model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlarmError {
    /// Hour or minute outside the valid 12-hour clock range
    #[error("invalid {field}: {value} is out of range")]
    InvalidTimeComponent { field: &'static str, value: u32 },

    /// Scene or sound id that does not exist in the catalogs
    #[error("unknown {kind} \"{id}\"")]
    UnknownCatalogReference { kind: &'static str, id: String },

    /// The fade-in window must last at least one minute
    #[error("fade-in duration must be at least one minute")]
    InvalidDuration,

    /// Brightness is a percentage
    #[error("brightness must be between 0 and 100, got {0}")]
    InvalidBrightness(u8),
}

/// AM/PM half of the 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A wake-up time expressed in 12-hour clock components.
///
/// Construction is validated; a `WakeTime` always displays as a well-formed
/// "H:MM AM/PM" string.
///
/// # Examples
/// ```
/// use daylight_home::models::alarm::{Meridiem, WakeTime};
///
/// let wake = WakeTime::new(7, 0, Meridiem::Am).unwrap();
/// assert_eq!(wake.to_string(), "7:00 AM");
/// assert_eq!(wake.minus_minutes(30).to_string(), "6:30 AM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl WakeTime {
    /// Create a wake time, rejecting out-of-range components
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self, AlarmError> {
        if !(1..=12).contains(&hour) {
            return Err(AlarmError::InvalidTimeComponent {
                field: "hour",
                value: u32::from(hour),
            });
        }
        if minute > 59 {
            return Err(AlarmError::InvalidTimeComponent {
                field: "minute",
                value: u32::from(minute),
            });
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Minutes since midnight in 24-hour form.
    ///
    /// Standard 12-hour normalization: 12 AM maps to hour 0 and 12 PM stays
    /// at hour 12.
    pub fn minutes_from_midnight(&self) -> u32 {
        let mut total = u32::from(self.hour) * 60 + u32::from(self.minute);
        match self.meridiem {
            Meridiem::Pm if self.hour != 12 => total += 12 * 60,
            Meridiem::Am if self.hour == 12 => total -= 12 * 60,
            _ => {}
        }
        total
    }

    /// Build a wake time from (possibly negative) minutes since midnight.
    ///
    /// Uses `rem_euclid` so that negative inputs wrap backwards across
    /// midnight instead of producing a negative remainder.
    pub fn from_minutes_from_midnight(total: i32) -> Self {
        let wrapped = total.rem_euclid(MINUTES_PER_DAY);
        let hours24 = (wrapped / 60) as u8;
        let minute = (wrapped % 60) as u8;
        let meridiem = if hours24 >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        };
        let hour = match hours24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// Subtract a number of minutes, wrapping on the 24-hour clock
    pub fn minus_minutes(self, minutes: u32) -> Self {
        // Reduce first so the subtraction below cannot overflow
        let duration = (minutes % MINUTES_PER_DAY as u32) as i32;
        Self::from_minutes_from_midnight(self.minutes_from_midnight() as i32 - duration)
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02} {}",
            self.hour,
            self.minute,
            self.meridiem.as_str()
        )
    }
}

/// Day of the week used by the recurrence set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first, matching the recurrence button row
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday, the default recurrence of a new alarm
    pub const WORKWEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Single-letter label shown on the recurrence buttons
    pub fn letter(&self) -> &'static str {
        match self {
            Weekday::Monday => "M",
            Weekday::Tuesday => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday => "T",
            Weekday::Friday => "F",
            Weekday::Saturday => "S",
            Weekday::Sunday => "S",
        }
    }
}

/// Immutable alarm configuration snapshot.
///
/// This is the only value that crosses the dialog boundary: built once on
/// save, handed to the host, never mutated. Serializes with the field names
/// the host contract uses (`lightScene`, `soundProfile`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmConfig {
    /// Wake time as "H:MM AM/PM"
    pub time: String,
    /// Recurrence days in the order the user selected them
    pub recurring: Vec<Weekday>,
    /// Fade-in window length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub light_scene: String,
    pub light_start_brightness: u8,
    pub light_end_brightness: u8,
    pub sound_profile: String,
    pub enabled: bool,
}

impl AlarmConfig {
    /// Validate field constraints and catalog references
    pub fn validate(&self, catalogs: &Catalogs) -> Result<(), AlarmError> {
        if self.duration_minutes == 0 {
            return Err(AlarmError::InvalidDuration);
        }
        if self.light_start_brightness > 100 {
            return Err(AlarmError::InvalidBrightness(self.light_start_brightness));
        }
        if self.light_end_brightness > 100 {
            return Err(AlarmError::InvalidBrightness(self.light_end_brightness));
        }
        catalogs.scene(&self.light_scene)?;
        catalogs.sound(&self.sound_profile)?;
        Ok(())
    }
}
