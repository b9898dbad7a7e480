//! Lights section of the alarm dialog: fade-in duration, scene selection,
//! brightness range, and the ramp preview strip.

use egui::{Color32, RichText, Rounding, Sense, Vec2};

use crate::services::ramp::brightness_at;
use crate::ui_egui::theme::{parse_hex_color, AppTheme};

use super::state::AlarmDialogState;
use super::widgets::{chevron, gradient_swatch, labeled_row, menu_card};
use crate::models::catalog::Catalogs;

const PREVIEW_SLICES: usize = 24;

/// Render the duration card and the collapsible "Set the lights" menu
pub fn render_lights_section(
    ui: &mut egui::Ui,
    state: &mut AlarmDialogState,
    catalogs: &Catalogs,
    theme: &AppTheme,
) {
    render_duration_card(ui, state, theme);
    ui.add_space(8.0);

    let selected_name = catalogs
        .scene(&state.light_scene)
        .map(|scene| scene.name)
        .unwrap_or("None selected");

    let header = menu_card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            if let Ok(scene) = catalogs.scene(&state.light_scene) {
                let top = parse_hex_color(scene.gradient[0]).unwrap_or(theme.surface_raised);
                let bottom = parse_hex_color(scene.gradient[1]).unwrap_or(theme.surface_raised);
                gradient_swatch(ui, Vec2::new(40.0, 40.0), top, bottom);
            }
            ui.vertical(|ui| {
                ui.label(RichText::new("Set the lights").strong());
                ui.label(
                    RichText::new(selected_name)
                        .small()
                        .color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(chevron(state.show_light_scenes));
            });
        });
    });
    if header.clicked() {
        state.show_light_scenes = !state.show_light_scenes;
    }

    if state.show_light_scenes {
        ui.add_space(8.0);
        render_scene_list(ui, state, catalogs, theme);
        ui.add_space(8.0);
        render_brightness_controls(ui, state, theme);
    }

    ui.add_space(16.0);
}

fn render_duration_card(ui: &mut egui::Ui, state: &mut AlarmDialogState, theme: &AppTheme) {
    egui::Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⏱").size(20.0));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Over").strong());
                        ui.add(
                            egui::DragValue::new(&mut state.duration_minutes)
                                .clamp_range(1..=720)
                                .suffix(" min"),
                        );
                    });
                    ui.label(
                        RichText::new(format!("Lights rise from {}", state.ramp_start_display()))
                            .small()
                            .color(theme.text_secondary),
                    );
                });
            });
        });
}

fn render_scene_list(
    ui: &mut egui::Ui,
    state: &mut AlarmDialogState,
    catalogs: &Catalogs,
    theme: &AppTheme,
) {
    for scene in catalogs.scenes() {
        let is_active = state.light_scene == scene.id;
        let top = parse_hex_color(scene.gradient[0]).unwrap_or(theme.surface_raised);
        let bottom = parse_hex_color(scene.gradient[1]).unwrap_or(theme.surface_raised);

        let card = egui::Frame::none()
            .fill(theme.surface)
            .stroke(egui::Stroke::new(
                2.0,
                if is_active { theme.accent } else { theme.surface },
            ))
            .rounding(Rounding::same(12.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    gradient_swatch(ui, Vec2::new(48.0, 48.0), top, bottom);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(scene.name).strong());
                        ui.label(
                            RichText::new(scene.description)
                                .small()
                                .color(theme.text_secondary),
                        );
                    });
                    if is_active {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new("✔").color(theme.accent));
                        });
                    }
                });
            })
            .response
            .interact(Sense::click());

        if card.clicked() {
            state.light_scene = scene.id.to_string();
            state.show_light_scenes = false;
        }
        ui.add_space(6.0);
    }
}

fn render_brightness_controls(ui: &mut egui::Ui, state: &mut AlarmDialogState, theme: &AppTheme) {
    egui::Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            labeled_row(ui, "Start brightness", |ui| {
                ui.add(egui::Slider::new(&mut state.light_start_brightness, 0..=100).suffix("%"));
            });

            labeled_row(ui, "End brightness", |ui| {
                ui.add(egui::Slider::new(&mut state.light_end_brightness, 0..=100).suffix("%"));
            });

            ui.add_space(6.0);
            render_ramp_preview(ui, state, theme);
        });
}

/// Preview strip of the fade-in: one slice per sample, brightened left to
/// right according to the selected easing curve.
fn render_ramp_preview(ui: &mut egui::Ui, state: &mut AlarmDialogState, theme: &AppTheme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Preview").small().color(theme.text_secondary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button(format!("Curve: {}", state.preview_easing.label()))
                .clicked()
            {
                state.preview_easing = state.preview_easing.next();
            }
        });
    });

    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), 14.0),
        Sense::hover(),
    );
    let painter = ui.painter();
    let slice_width = rect.width() / PREVIEW_SLICES as f32;

    for i in 0..PREVIEW_SLICES {
        let fraction = i as f32 / (PREVIEW_SLICES - 1) as f32;
        let brightness = brightness_at(
            state.light_start_brightness,
            state.light_end_brightness,
            state.preview_easing,
            fraction,
        );
        let alpha = (u16::from(brightness) * 255 / 100) as u8;
        let color = Color32::from_rgba_unmultiplied(255, 215, 0, alpha);

        let mut slice = rect;
        slice.min.x = rect.min.x + slice_width * i as f32;
        slice.max.x = slice.min.x + slice_width;
        painter.rect_filled(slice, Rounding::ZERO, color);
    }
}
