use crate::models::alarm::{AlarmConfig, AlarmError, Meridiem, WakeTime, Weekday};
use crate::models::catalog::Catalogs;
use crate::services::ramp::Easing;

/// State for the sunrise alarm configuration dialog.
///
/// This is the draft: constructed fresh every time the dialog opens,
/// mutated only by user edits, converted once into an [`AlarmConfig`]
/// snapshot on save and then discarded.
pub struct AlarmDialogState {
    /// Wake hour on the 12-hour clock, 1..=12
    pub hour: u8,
    /// Wake minute, 0..=59
    pub minute: u8,
    pub meridiem: Meridiem,
    /// Recurrence days in the order the user selected them
    pub recurring: Vec<Weekday>,
    /// Fade-in window length in minutes
    pub duration_minutes: u32,
    /// Selected light scene id
    pub light_scene: String,
    pub light_start_brightness: u8,
    pub light_end_brightness: u8,
    /// Selected sound profile id
    pub sound_profile: String,
    pub enabled: bool,

    // UI state
    pub error_message: Option<String>,
    pub show_light_scenes: bool,
    pub show_sound_profiles: bool,
    /// Easing used for the fade-in preview strip
    pub preview_easing: Easing,
}

impl AlarmDialogState {
    /// Create a fresh draft with the default alarm: 7:00 AM on weekdays,
    /// a 30-minute fade-in, the first scene and sound, brightness 1..100.
    pub fn new(catalogs: &Catalogs) -> Self {
        Self {
            hour: 7,
            minute: 0,
            meridiem: Meridiem::Am,
            recurring: Weekday::WORKWEEK.to_vec(),
            duration_minutes: 30,
            light_scene: catalogs
                .default_scene()
                .map_or_else(String::new, |scene| scene.id.to_string()),
            light_start_brightness: 1,
            light_end_brightness: 100,
            sound_profile: catalogs
                .default_sound()
                .map_or_else(String::new, |sound| sound.id.to_string()),
            enabled: true,
            error_message: None,
            show_light_scenes: false,
            show_sound_profiles: false,
            preview_easing: Easing::default(),
        }
    }

    /// The draft's wake time as a validated value
    pub fn wake_time(&self) -> Result<WakeTime, AlarmError> {
        WakeTime::new(self.hour, self.minute, self.meridiem)
    }

    /// Set the wake time, rejecting out-of-range components.
    ///
    /// The picker widgets only offer valid values; this is the checked
    /// entry point for programmatic callers.
    pub fn set_wake_time(
        &mut self,
        hour: u8,
        minute: u8,
        meridiem: Meridiem,
    ) -> Result<(), AlarmError> {
        let time = WakeTime::new(hour, minute, meridiem)?;
        self.hour = time.hour();
        self.minute = time.minute();
        self.meridiem = time.meridiem();
        Ok(())
    }

    /// Remove the day from the recurrence set if present, else add it
    pub fn toggle_recurrence_day(&mut self, day: Weekday) {
        if let Some(position) = self.recurring.iter().position(|d| *d == day) {
            self.recurring.remove(position);
        } else {
            self.recurring.push(day);
        }
    }

    pub fn recurs_on(&self, day: Weekday) -> bool {
        self.recurring.contains(&day)
    }

    /// The clock time at which the light fade-in begins: wake time minus
    /// duration, wrapped on the 24-hour clock
    pub fn ramp_start(&self) -> Result<WakeTime, AlarmError> {
        Ok(self.wake_time()?.minus_minutes(self.duration_minutes))
    }

    /// Display string for the ramp start, e.g. "6:30 AM"
    pub fn ramp_start_display(&self) -> String {
        match self.ramp_start() {
            Ok(time) => time.to_string(),
            Err(_) => "--:--".to_string(),
        }
    }

    /// Build the immutable snapshot handed to the save callback.
    ///
    /// Validates the wake time, field constraints, and catalog references;
    /// the draft itself is left untouched.
    pub fn to_config(&self, catalogs: &Catalogs) -> Result<AlarmConfig, AlarmError> {
        let wake = self.wake_time()?;
        let config = AlarmConfig {
            time: wake.to_string(),
            recurring: self.recurring.clone(),
            duration_minutes: self.duration_minutes,
            light_scene: self.light_scene.clone(),
            light_start_brightness: self.light_start_brightness,
            light_end_brightness: self.light_end_brightness,
            sound_profile: self.sound_profile.clone(),
            enabled: self.enabled,
        };
        config.validate(catalogs)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fresh_state() -> AlarmDialogState {
        AlarmDialogState::new(&Catalogs::builtin())
    }

    #[test]
    fn new_draft_has_the_documented_defaults() {
        let state = fresh_state();
        assert_eq!(state.hour, 7);
        assert_eq!(state.minute, 0);
        assert_eq!(state.meridiem, Meridiem::Am);
        assert_eq!(state.recurring, Weekday::WORKWEEK.to_vec());
        assert_eq!(state.duration_minutes, 30);
        assert_eq!(state.light_scene, "sunrise");
        assert_eq!(state.light_start_brightness, 1);
        assert_eq!(state.light_end_brightness, 100);
        assert_eq!(state.sound_profile, "gentle-waves");
        assert!(state.enabled);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn default_ramp_starts_half_an_hour_before_wake() {
        assert_eq!(fresh_state().ramp_start_display(), "6:30 AM");
    }

    #[test]
    fn ramp_start_wraps_across_midnight() {
        let mut state = fresh_state();
        state.set_wake_time(12, 0, Meridiem::Am).unwrap();
        state.duration_minutes = 15;
        assert_eq!(state.ramp_start_display(), "11:45 PM");
    }

    #[test]
    fn ramp_start_handles_the_noon_boundary() {
        let mut state = fresh_state();
        state.set_wake_time(12, 30, Meridiem::Pm).unwrap();
        state.duration_minutes = 45;
        assert_eq!(state.ramp_start_display(), "11:45 AM");
    }

    #[test]
    fn ramp_start_ignores_recurrence() {
        let mut state = fresh_state();
        let before = state.ramp_start_display();
        state.toggle_recurrence_day(Weekday::Sunday);
        state.toggle_recurrence_day(Weekday::Monday);
        assert_eq!(state.ramp_start_display(), before);
    }

    #[test]
    fn set_wake_time_rejects_bad_components() {
        let mut state = fresh_state();
        assert!(state.set_wake_time(0, 0, Meridiem::Am).is_err());
        assert!(state.set_wake_time(7, 60, Meridiem::Am).is_err());
        // The draft keeps its previous value on rejection
        assert_eq!(state.hour, 7);
        assert_eq!(state.minute, 0);
    }

    #[test]
    fn toggling_a_day_twice_restores_the_set() {
        let mut state = fresh_state();
        let original = state.recurring.clone();

        state.toggle_recurrence_day(Weekday::Saturday);
        assert!(state.recurs_on(Weekday::Saturday));
        state.toggle_recurrence_day(Weekday::Saturday);
        assert_eq!(state.recurring, original);

        state.toggle_recurrence_day(Weekday::Monday);
        assert!(!state.recurs_on(Weekday::Monday));
        state.toggle_recurrence_day(Weekday::Monday);
        // Monday re-joins at the end, but membership matches the original
        for day in Weekday::ALL {
            assert_eq!(
                state.recurs_on(day),
                original.contains(&day),
                "{:?} membership changed",
                day
            );
        }
    }

    #[test]
    fn toggling_never_duplicates_a_day() {
        let mut state = fresh_state();
        for _ in 0..5 {
            state.toggle_recurrence_day(Weekday::Wednesday);
        }
        let wednesdays = state
            .recurring
            .iter()
            .filter(|d| **d == Weekday::Wednesday)
            .count();
        assert!(wednesdays <= 1);
    }

    #[test]
    fn snapshot_reflects_the_latest_edits_in_any_order() {
        let catalogs = Catalogs::builtin();
        let mut state = AlarmDialogState::new(&catalogs);

        state.toggle_recurrence_day(Weekday::Monday);
        state.set_wake_time(6, 45, Meridiem::Am).unwrap();
        state.toggle_recurrence_day(Weekday::Sunday);
        state.set_wake_time(9, 15, Meridiem::Pm).unwrap();
        state.duration_minutes = 20;

        let config = state.to_config(&catalogs).unwrap();
        assert_eq!(config.time, "9:15 PM");
        assert_eq!(
            config.recurring,
            vec![
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Sunday,
            ]
        );
        assert_eq!(config.duration_minutes, 20);
    }

    #[test]
    fn snapshot_is_independent_of_later_draft_edits() {
        let catalogs = Catalogs::builtin();
        let mut state = AlarmDialogState::new(&catalogs);
        let config = state.to_config(&catalogs).unwrap();

        state.set_wake_time(8, 30, Meridiem::Pm).unwrap();
        state.enabled = false;

        assert_eq!(config.time, "7:00 AM");
        assert!(config.enabled);
    }

    #[test]
    fn snapshot_propagates_catalog_errors() {
        let catalogs = Catalogs::builtin();
        let mut state = AlarmDialogState::new(&catalogs);
        state.sound_profile = "air-horn".to_string();

        let err = state.to_config(&catalogs).unwrap_err();
        assert_eq!(
            err,
            AlarmError::UnknownCatalogReference {
                kind: "sound profile",
                id: "air-horn".to_string()
            }
        );
    }

    #[test]
    fn snapshot_rejects_zero_duration() {
        let catalogs = Catalogs::builtin();
        let mut state = AlarmDialogState::new(&catalogs);
        state.duration_minutes = 0;
        assert_eq!(
            state.to_config(&catalogs).unwrap_err(),
            AlarmError::InvalidDuration
        );
    }

    #[test]
    fn empty_catalogs_leave_the_draft_without_selections() {
        let empty = Catalogs::new(Vec::new(), Vec::new());
        let state = AlarmDialogState::new(&empty);
        assert!(state.light_scene.is_empty());
        assert!(state.sound_profile.is_empty());
        // ...and the snapshot refuses to reference nothing
        assert!(state.to_config(&empty).is_err());
    }
}
