// Settings service
// Loads and saves application preferences as a TOML file in the
// platform config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub struct SettingsService;

impl SettingsService {
    /// Path of the settings file under the platform config directory.
    /// Creates the directory if it does not exist.
    pub fn settings_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "DaylightHome", "daylight-home")
            .context("Failed to resolve the platform config directory")?;

        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
        }

        Ok(config_dir.join("settings.toml"))
    }

    /// Load settings, falling back to defaults if the file is missing or
    /// unreadable. Failures other than a missing file are logged.
    pub fn load() -> Settings {
        match Self::settings_path().and_then(|path| Self::load_from(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load settings, using defaults: {:#}", err);
                Settings::default()
            }
        }
    }

    /// Save settings to the platform config directory
    pub fn save(settings: &Settings) -> Result<()> {
        let path = Self::settings_path()?;
        Self::save_to(&path, settings)
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    /// Save settings to a specific file
    pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
        let text =
            toml::to_string_pretty(settings).context("Failed to serialize settings to TOML")?;
        fs::write(path, text).with_context(|| format!("Failed to write settings file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = SettingsService::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn saved_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            theme: ThemePreference::Dark,
        };

        SettingsService::save_to(&path, &settings).unwrap();
        let loaded = SettingsService::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = ").unwrap();
        assert!(SettingsService::load_from(&path).is_err());
    }
}
