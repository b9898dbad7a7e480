use egui::{Color32, RichText, Rounding, Vec2};

use crate::models::alarm::AlarmConfig;
use crate::models::catalog::Catalogs;
use crate::ui_egui::theme::AppTheme;

use super::render_lights::render_lights_section;
use super::render_recurrence::render_recurrence_section;
use super::render_sound::render_sound_section;
use super::render_time::render_wake_time_section;
use super::state::AlarmDialogState;

/// Outcome of one frame of the alarm dialog
#[derive(Default)]
pub struct AlarmDialogResult {
    /// The snapshot built on a successful save
    pub saved: Option<AlarmConfig>,
    /// Whether the dialog closed this frame (saved or dismissed)
    pub closed: bool,
}

/// Render the sunrise alarm configuration dialog.
///
/// The host owns the open flag; on save the snapshot is returned in the
/// result and the flag is cleared. Closing without saving just clears the
/// flag so the host can discard the draft.
pub fn render_alarm_dialog(
    ctx: &egui::Context,
    state: &mut AlarmDialogState,
    catalogs: &Catalogs,
    theme: &AppTheme,
    show_dialog: &mut bool,
) -> AlarmDialogResult {
    let mut result = AlarmDialogResult::default();
    let mut dialog_open = *show_dialog;
    let was_open = dialog_open;

    egui::Window::new(RichText::new("Rise and shine").strong())
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(540.0)
                .show(ui, |ui| {
                    render_error_banner(ui, state);
                    render_wake_time_section(ui, state, theme);
                    render_lights_section(ui, state, catalogs, theme);
                    render_sound_section(ui, state, catalogs, theme);
                    render_recurrence_section(ui, state, theme);
                });

            ui.separator();
            ui.add_space(4.0);

            ui.checkbox(&mut state.enabled, "Enabled");
            ui.add_space(8.0);

            let save_button = egui::Button::new(
                RichText::new("Save Alarm").strong().color(theme.on_accent),
            )
            .fill(theme.accent)
            .rounding(Rounding::same(12.0))
            .min_size(Vec2::new(ui.available_width(), 40.0));

            if ui.add(save_button).clicked() {
                match state.to_config(catalogs) {
                    Ok(config) => {
                        result.saved = Some(config);
                        result.closed = true;
                    }
                    Err(err) => {
                        state.error_message = Some(err.to_string());
                    }
                }
            }
        });

    if result.closed {
        // Saved: close on the host's behalf
        *show_dialog = false;
    } else if was_open && !dialog_open {
        // Dismissed via the window's close button
        *show_dialog = false;
        result.closed = true;
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, state: &AlarmDialogState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}
