// Catalog module
// Read-only reference tables for light scenes and wake-up sounds.
// The tables are injected into the dialog at construction so the alarm
// logic stays testable without a UI runtime.

use crate::models::alarm::AlarmError;

/// A selectable light scene for the sunrise ramp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightScene {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Two-stop gradient, top and bottom hex colors
    pub gradient: [&'static str; 2],
}

/// A selectable wake-up sound profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundProfile {
    pub id: &'static str,
    pub name: &'static str,
    /// Glyph shown next to the profile name
    pub icon: &'static str,
}

/// The fixed option tables the configuration dialog reads from.
///
/// Never mutated at runtime; lookups are fallible so a dangling id is
/// reported instead of silently ignored.
#[derive(Debug, Clone)]
pub struct Catalogs {
    scenes: Vec<LightScene>,
    sounds: Vec<SoundProfile>,
}

impl Catalogs {
    /// Build catalogs from custom tables
    pub fn new(scenes: Vec<LightScene>, sounds: Vec<SoundProfile>) -> Self {
        Self { scenes, sounds }
    }

    /// The built-in scene and sound tables shipped with the app
    pub fn builtin() -> Self {
        Self::new(
            vec![
                LightScene {
                    id: "sunrise",
                    name: "Follow a sunrise",
                    description: "Perfect sunrise with an energy boost.",
                    gradient: ["#89CFF0", "#FFB366"],
                },
                LightScene {
                    id: "warm-white",
                    name: "Warm white",
                    description: "Gentle warm light gradually increases.",
                    gradient: ["#FFF5E1", "#FFD700"],
                },
                LightScene {
                    id: "energize",
                    name: "Energize",
                    description: "Bright cool light to feel alert.",
                    gradient: ["#E0F7FF", "#4DD0E1"],
                },
                LightScene {
                    id: "golden-hour",
                    name: "Golden hour",
                    description: "Beautiful golden morning tones.",
                    gradient: ["#FFE5B4", "#FF8C00"],
                },
            ],
            vec![
                SoundProfile {
                    id: "gentle-waves",
                    name: "Gentle Waves",
                    icon: "💧",
                },
                SoundProfile {
                    id: "forest-birds",
                    name: "Forest Birds",
                    icon: "🍃",
                },
                SoundProfile {
                    id: "morning-breeze",
                    name: "Morning Breeze",
                    icon: "☁",
                },
                SoundProfile {
                    id: "soft-piano",
                    name: "Soft Piano",
                    icon: "🎵",
                },
                SoundProfile {
                    id: "zen-bells",
                    name: "Zen Bells",
                    icon: "🔔",
                },
            ],
        )
    }

    pub fn scenes(&self) -> &[LightScene] {
        &self.scenes
    }

    pub fn sounds(&self) -> &[SoundProfile] {
        &self.sounds
    }

    /// Look up a light scene by id
    pub fn scene(&self, id: &str) -> Result<&LightScene, AlarmError> {
        self.scenes
            .iter()
            .find(|scene| scene.id == id)
            .ok_or_else(|| AlarmError::UnknownCatalogReference {
                kind: "light scene",
                id: id.to_string(),
            })
    }

    /// Look up a sound profile by id
    pub fn sound(&self, id: &str) -> Result<&SoundProfile, AlarmError> {
        self.sounds
            .iter()
            .find(|sound| sound.id == id)
            .ok_or_else(|| AlarmError::UnknownCatalogReference {
                kind: "sound profile",
                id: id.to_string(),
            })
    }

    /// First scene in the table, the default for a fresh draft
    pub fn default_scene(&self) -> Option<&LightScene> {
        self.scenes.first()
    }

    /// First sound profile in the table, the default for a fresh draft
    pub fn default_sound(&self) -> Option<&SoundProfile> {
        self.sounds.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_are_first_entries() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.default_scene().map(|s| s.id), Some("sunrise"));
        assert_eq!(
            catalogs.default_sound().map(|s| s.id),
            Some("gentle-waves")
        );
    }

    #[test]
    fn lookup_finds_every_builtin_entry() {
        let catalogs = Catalogs::builtin();
        for scene in catalogs.scenes() {
            assert!(catalogs.scene(scene.id).is_ok());
        }
        for sound in catalogs.sounds() {
            assert!(catalogs.sound(sound.id).is_ok());
        }
    }

    #[test]
    fn unknown_ids_are_reported() {
        let catalogs = Catalogs::builtin();
        assert!(matches!(
            catalogs.scene("disco"),
            Err(AlarmError::UnknownCatalogReference { kind: "light scene", .. })
        ));
        assert!(matches!(
            catalogs.sound("air-horn"),
            Err(AlarmError::UnknownCatalogReference { kind: "sound profile", .. })
        ));
    }

    #[test]
    fn empty_tables_have_no_defaults() {
        let catalogs = Catalogs::new(Vec::new(), Vec::new());
        assert!(catalogs.default_scene().is_none());
        assert!(catalogs.default_sound().is_none());
    }
}
