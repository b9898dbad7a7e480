//! Wake-time section of the alarm dialog: hour/minute pickers and the
//! AM/PM toggle.

use egui::{RichText, Rounding};

use crate::models::alarm::Meridiem;
use crate::ui_egui::theme::AppTheme;

use super::state::AlarmDialogState;
use super::widgets::pill_button;

/// Render the "Wake me up at" section
pub fn render_wake_time_section(ui: &mut egui::Ui, state: &mut AlarmDialogState, theme: &AppTheme) {
    ui.label(RichText::new("Wake me up at").heading().strong());
    ui.add_space(8.0);

    egui::Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(16.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 110.0);

                egui::ComboBox::from_id_source("alarm_wake_hour")
                    .width(64.0)
                    .selected_text(RichText::new(format!("{}", state.hour)).size(24.0).strong())
                    .show_ui(ui, |ui| {
                        for hour in 1..=12u8 {
                            ui.selectable_value(&mut state.hour, hour, format!("{}", hour));
                        }
                    });

                ui.label(RichText::new(":").size(24.0).strong());

                egui::ComboBox::from_id_source("alarm_wake_minute")
                    .width(64.0)
                    .selected_text(
                        RichText::new(format!("{:02}", state.minute))
                            .size(24.0)
                            .strong(),
                    )
                    .show_ui(ui, |ui| {
                        for minute in 0..60u8 {
                            ui.selectable_value(&mut state.minute, minute, format!("{:02}", minute));
                        }
                    });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    if pill_button(ui, state.meridiem == Meridiem::Am, "AM", theme).clicked() {
                        state.meridiem = Meridiem::Am;
                    }
                    if pill_button(ui, state.meridiem == Meridiem::Pm, "PM", theme).clicked() {
                        state.meridiem = Meridiem::Pm;
                    }
                });
            });
        });

    ui.add_space(16.0);
}
