//! Theme module for the daylight-home application
//!
//! Defines the AppTheme palette for light and dark mode and provides
//! conversion from the catalog's hex color strings to egui colors.

use egui::{Color32, Context, Stroke, Visuals};

use crate::models::settings::ThemePreference;

/// The color palette used across every screen
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background behind every screen
    pub app_background: Color32,

    /// Card background (time cards, menu cards, the picker well)
    pub surface: Color32,

    /// Raised chips sitting on a card, such as icon badges
    pub surface_raised: Color32,

    /// Selected/pressed card background
    pub surface_active: Color32,

    /// Fill for primary actions and active toggles
    pub accent: Color32,

    /// Text and icons drawn on top of the accent fill
    pub on_accent: Color32,

    /// Hairline separators and card borders
    pub outline: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color (subtitles, descriptions)
    pub text_secondary: Color32,

    /// Inactive nav icons and unselected picker values
    pub text_disabled: Color32,

    /// Toast background for save confirmations
    pub success_background: Color32,

    /// Toast text for save confirmations
    pub success_text: Color32,
}

impl AppTheme {
    /// The default light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 255, 255),
            surface: Color32::from_rgb(248, 248, 248),
            surface_raised: Color32::from_rgb(255, 255, 255),
            surface_active: Color32::from_rgb(232, 232, 232),
            accent: Color32::from_rgb(0, 0, 0),
            on_accent: Color32::from_rgb(255, 255, 255),
            outline: Color32::from_rgb(240, 240, 240),
            text_primary: Color32::from_rgb(20, 20, 20),
            text_secondary: Color32::from_rgb(102, 102, 102),
            text_disabled: Color32::from_rgb(153, 153, 153),
            success_background: Color32::from_rgb(220, 255, 220),
            success_text: Color32::from_rgb(20, 110, 40),
        }
    }

    /// The default dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(18, 18, 20),
            surface: Color32::from_rgb(32, 32, 36),
            surface_raised: Color32::from_rgb(48, 48, 52),
            surface_active: Color32::from_rgb(58, 58, 62),
            accent: Color32::from_rgb(235, 235, 235),
            on_accent: Color32::from_rgb(20, 20, 20),
            outline: Color32::from_rgb(45, 45, 48),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            text_disabled: Color32::from_rgb(110, 110, 110),
            success_background: Color32::from_rgb(30, 70, 40),
            success_text: Color32::from_rgb(100, 220, 120),
        }
    }

    /// Resolve a theme preference, consulting the OS for `System`
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Install this palette into the egui context
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = if self.is_dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.app_background;
        visuals.window_stroke = Stroke::new(1.0, self.outline);
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.on_accent);

        ctx.set_visuals(visuals);
    }
}

/// Parse "#RRGGBB" or "#RGB" into a Color32
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
        Some(Color32::from_rgb(r, g, b))
    } else {
        None
    }
}
