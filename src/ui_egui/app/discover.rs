//! Discover screen placeholder.

use egui::RichText;

use super::DaylightApp;

impl DaylightApp {
    pub(super) fn render_discover(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 2.0 - 40.0);
            ui.label(RichText::new("Discover").size(32.0).strong());
            ui.add_space(4.0);
            ui.label(
                RichText::new("Coming soon...").color(self.active_theme.text_secondary),
            );
        });
    }
}
