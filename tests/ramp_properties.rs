// Property-based tests for the wake-time arithmetic and ramp curves

use daylight_home::models::alarm::{Meridiem, WakeTime};
use daylight_home::services::ramp::{brightness_at, Easing};
use proptest::prelude::*;

fn meridiem(is_pm: bool) -> Meridiem {
    if is_pm {
        Meridiem::Pm
    } else {
        Meridiem::Am
    }
}

proptest! {
    /// Property: subtracting any duration from any valid wake time yields
    /// a well-formed "H:MM AM/PM" display with H in 1..=12 and MM in 00..=59.
    #[test]
    fn ramp_start_is_always_a_valid_clock_time(
        hour in 1..=12u8,
        minute in 0..=59u8,
        is_pm in any::<bool>(),
        duration in 0..=10_000u32,
    ) {
        let wake = WakeTime::new(hour, minute, meridiem(is_pm)).unwrap();
        let display = wake.minus_minutes(duration).to_string();

        let (time_part, period) = display.split_once(' ').expect("period separator");
        prop_assert!(period == "AM" || period == "PM");

        let (h, m) = time_part.split_once(':').expect("colon separator");
        let h: u32 = h.parse().expect("hour digits");
        prop_assert!((1..=12).contains(&h));
        prop_assert_eq!(m.len(), 2);
        let m: u32 = m.parse().expect("minute digits");
        prop_assert!(m <= 59);
    }

    /// Property: the wrap is periodic; a whole extra day changes nothing.
    #[test]
    fn subtracting_a_whole_extra_day_changes_nothing(
        hour in 1..=12u8,
        minute in 0..=59u8,
        is_pm in any::<bool>(),
        duration in 0..=2_000u32,
    ) {
        let wake = WakeTime::new(hour, minute, meridiem(is_pm)).unwrap();
        prop_assert_eq!(
            wake.minus_minutes(duration),
            wake.minus_minutes(duration + 24 * 60)
        );
    }

    /// Property: minutes-from-midnight round-trips through the constructor.
    #[test]
    fn wake_time_round_trips_through_minutes(
        hour in 1..=12u8,
        minute in 0..=59u8,
        is_pm in any::<bool>(),
    ) {
        let wake = WakeTime::new(hour, minute, meridiem(is_pm)).unwrap();
        let total = wake.minutes_from_midnight();
        prop_assert!(total < 24 * 60);
        prop_assert_eq!(WakeTime::from_minutes_from_midnight(total as i32), wake);
    }

    /// Property: interpolated brightness never leaves the start..end range,
    /// whichever way the ramp points.
    #[test]
    fn brightness_stays_within_the_ramp_bounds(
        start in 0..=100u8,
        end in 0..=100u8,
        curve in 0..4usize,
        fraction in -0.5f32..=1.5f32,
    ) {
        let easing = [Easing::Linear, Easing::InQuad, Easing::InCubic, Easing::OutCubic][curve];
        let value = brightness_at(start, end, easing, fraction);
        let (low, high) = if start <= end { (start, end) } else { (end, start) };
        prop_assert!(value >= low && value <= high);
    }
}
