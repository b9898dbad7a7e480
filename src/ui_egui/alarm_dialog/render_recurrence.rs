//! Recurrence section of the alarm dialog: one round toggle per weekday.

use egui::RichText;

use crate::models::alarm::Weekday;
use crate::ui_egui::theme::AppTheme;

use super::state::AlarmDialogState;
use super::widgets::{indented_row, pill_button};

/// Render the "Recurring" section
pub fn render_recurrence_section(
    ui: &mut egui::Ui,
    state: &mut AlarmDialogState,
    theme: &AppTheme,
) {
    ui.label(RichText::new("Recurring").heading().strong());
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for day in Weekday::ALL {
            let selected = state.recurs_on(day);
            if pill_button(ui, selected, day.letter(), theme)
                .on_hover_text(day.id())
                .clicked()
            {
                state.toggle_recurrence_day(day);
            }
        }
    });

    if state.recurring.is_empty() {
        ui.add_space(4.0);
        indented_row(ui, |ui| {
            ui.label(
                RichText::new("No repeat days selected; the alarm rings once.")
                    .small()
                    .color(theme.text_secondary),
            );
        });
    }

    ui.add_space(16.0);
}
