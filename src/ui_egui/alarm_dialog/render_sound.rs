//! Sound section of the alarm dialog: the collapsible wake-up sound menu.

use egui::{RichText, Rounding, Sense};

use crate::models::catalog::Catalogs;
use crate::ui_egui::theme::AppTheme;

use super::state::AlarmDialogState;
use super::widgets::{chevron, menu_card};

/// Render the "Wake-up sound" menu card and profile list
pub fn render_sound_section(
    ui: &mut egui::Ui,
    state: &mut AlarmDialogState,
    catalogs: &Catalogs,
    theme: &AppTheme,
) {
    let (selected_icon, selected_name) = catalogs
        .sound(&state.sound_profile)
        .map(|sound| (sound.icon, sound.name))
        .unwrap_or(("♪", "None selected"));

    let header = menu_card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(selected_icon).size(20.0));
            ui.vertical(|ui| {
                ui.label(RichText::new("Wake-up sound").strong());
                ui.label(
                    RichText::new(selected_name)
                        .small()
                        .color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(chevron(state.show_sound_profiles));
            });
        });
    });
    if header.clicked() {
        state.show_sound_profiles = !state.show_sound_profiles;
    }

    if state.show_sound_profiles {
        ui.add_space(8.0);
        for sound in catalogs.sounds() {
            let is_active = state.sound_profile == sound.id;
            let row = egui::Frame::none()
                .fill(if is_active {
                    theme.surface_active
                } else {
                    theme.surface
                })
                .rounding(Rounding::same(12.0))
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(sound.icon).size(18.0));
                        ui.label(sound.name);
                        if is_active {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new("✔").color(theme.accent));
                                },
                            );
                        }
                    });
                })
                .response
                .interact(Sense::click());

            if row.clicked() {
                state.sound_profile = sound.id.to_string();
                state.show_sound_profiles = false;
            }
            ui.add_space(6.0);
        }
    }

    ui.add_space(16.0);
}
