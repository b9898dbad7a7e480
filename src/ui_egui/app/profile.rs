//! Profile screen: user settings, currently just the appearance choice.

use egui::RichText;

use crate::models::settings::ThemePreference;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::AppTheme;

use super::DaylightApp;

const THEME_CHOICES: [ThemePreference; 3] = [
    ThemePreference::Light,
    ThemePreference::Dark,
    ThemePreference::System,
];

impl DaylightApp {
    pub(super) fn render_profile(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(RichText::new("Profile").size(32.0).strong());
            ui.add_space(4.0);
            ui.label(
                RichText::new("User profile settings").color(self.active_theme.text_secondary),
            );

            ui.add_space(24.0);
            ui.label(RichText::new("Appearance").strong());
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                // Center the three choices under the heading
                ui.add_space(ui.available_width() / 2.0 - 110.0);
                for choice in THEME_CHOICES {
                    let selected = self.settings.theme == choice;
                    if ui.selectable_label(selected, choice.label()).clicked() && !selected {
                        self.apply_theme_preference(choice, ui.ctx());
                    }
                }
            });
        });
    }

    fn apply_theme_preference(&mut self, choice: ThemePreference, ctx: &egui::Context) {
        self.settings.theme = choice;
        self.active_theme = AppTheme::from_preference(choice);
        self.active_theme.apply(ctx);

        if let Err(err) = SettingsService::save(&self.settings) {
            log::warn!("Failed to save settings: {:#}", err);
        }
    }
}
