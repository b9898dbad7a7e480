// End-to-end draft -> snapshot flow over the public library API

use daylight_home::models::alarm::{AlarmError, Meridiem, Weekday};
use daylight_home::models::catalog::Catalogs;
use daylight_home::ui_egui::alarm_dialog::AlarmDialogState;
use pretty_assertions::assert_eq;

#[test]
fn configure_and_save_a_weekend_alarm() {
    let catalogs = Catalogs::builtin();
    let mut draft = AlarmDialogState::new(&catalogs);

    draft.set_wake_time(8, 30, Meridiem::Am).unwrap();
    draft.duration_minutes = 45;
    // Clear the weekday defaults, then pick the weekend
    for day in Weekday::WORKWEEK {
        draft.toggle_recurrence_day(day);
    }
    draft.toggle_recurrence_day(Weekday::Saturday);
    draft.toggle_recurrence_day(Weekday::Sunday);
    draft.light_scene = "golden-hour".to_string();
    draft.sound_profile = "soft-piano".to_string();
    draft.light_start_brightness = 5;
    draft.light_end_brightness = 80;

    assert_eq!(draft.ramp_start_display(), "7:45 AM");

    let config = draft.to_config(&catalogs).unwrap();
    assert_eq!(config.time, "8:30 AM");
    assert_eq!(config.recurring, vec![Weekday::Saturday, Weekday::Sunday]);
    assert_eq!(config.duration_minutes, 45);
    assert_eq!(config.light_scene, "golden-hour");
    assert_eq!(config.light_start_brightness, 5);
    assert_eq!(config.light_end_brightness, 80);
    assert_eq!(config.sound_profile, "soft-piano");
    assert!(config.enabled);
}

#[test]
fn saved_payload_matches_the_host_contract() {
    let catalogs = Catalogs::builtin();
    let draft = AlarmDialogState::new(&catalogs);
    let config = draft.to_config(&catalogs).unwrap();

    let json = serde_json::to_value(&config).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "duration",
            "enabled",
            "lightEndBrightness",
            "lightScene",
            "lightStartBrightness",
            "recurring",
            "soundProfile",
            "time",
        ]
    );
    assert_eq!(json["time"], "7:00 AM");
    assert_eq!(json["duration"], 30);
}

#[test]
fn unknown_references_are_reported_not_ignored() {
    let catalogs = Catalogs::builtin();
    let mut draft = AlarmDialogState::new(&catalogs);
    draft.light_scene = "midnight-disco".to_string();

    match draft.to_config(&catalogs) {
        Err(AlarmError::UnknownCatalogReference { kind, id }) => {
            assert_eq!(kind, "light scene");
            assert_eq!(id, "midnight-disco");
        }
        other => panic!("expected an unknown-reference error, got {:?}", other),
    }
}

#[test]
fn reopening_the_dialog_resets_to_defaults() {
    let catalogs = Catalogs::builtin();

    let mut draft = AlarmDialogState::new(&catalogs);
    draft.set_wake_time(11, 11, Meridiem::Pm).unwrap();
    draft.toggle_recurrence_day(Weekday::Monday);
    drop(draft);

    // A fresh draft carries no trace of the discarded one
    let fresh = AlarmDialogState::new(&catalogs);
    let config = fresh.to_config(&catalogs).unwrap();
    assert_eq!(config.time, "7:00 AM");
    assert_eq!(config.recurring, Weekday::WORKWEEK.to_vec());
}
