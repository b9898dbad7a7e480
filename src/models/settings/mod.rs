// Settings module
// Application preferences persisted between sessions

use serde::{Deserialize, Serialize};

/// Which color palette the app should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's dark mode setting
    #[default]
    System,
}

impl ThemePreference {
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

/// User-facing application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_system_theme() {
        assert_eq!(Settings::default().theme, ThemePreference::System);
    }

    #[test]
    fn round_trips_through_toml() {
        let settings = Settings {
            theme: ThemePreference::Dark,
        };
        let text = toml::to_string(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn unknown_fields_are_ignored_on_load() {
        let back: Settings = toml::from_str("theme = \"light\"\nlegacy_flag = true\n").unwrap();
        assert_eq!(back.theme, ThemePreference::Light);
    }
}
