//! Bottom navigation bar: Home / Discover / Profile.

use egui::RichText;

use super::state::NavigationTab;
use super::DaylightApp;

impl DaylightApp {
    pub(super) fn render_bottom_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_navigation")
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::symmetric(0.0, 10.0))
                    .stroke(egui::Stroke::new(1.0, self.active_theme.outline)),
            )
            .show(ctx, |ui| {
                ui.columns(NavigationTab::ALL.len(), |columns| {
                    for (index, tab) in NavigationTab::ALL.iter().enumerate() {
                        columns[index].vertical_centered(|ui| {
                            let active = self.nav_tab == *tab;
                            let color = if active {
                                self.active_theme.accent
                            } else {
                                self.active_theme.text_disabled
                            };

                            let response = ui
                                .add(
                                    egui::Button::new(
                                        RichText::new(tab.glyph()).size(22.0).color(color),
                                    )
                                    .frame(false),
                                )
                                .on_hover_text(tab.label());

                            if response.clicked() {
                                self.nav_tab = *tab;
                            }
                        });
                    }
                });
            });
    }
}
