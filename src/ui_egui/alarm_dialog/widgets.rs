use egui::{Color32, Response, RichText, Rounding, Sense, Stroke, Ui, Vec2};

use crate::ui_egui::theme::AppTheme;

pub const FORM_LABEL_WIDTH: f32 = 130.0;

/// Render a form row with a fixed-width label followed by content
pub fn labeled_row(
    ui: &mut Ui,
    label: impl Into<RichText>,
    add_contents: impl FnOnce(&mut Ui),
) {
    let label = label.into();
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            Vec2::new(FORM_LABEL_WIDTH, 20.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );
        add_contents(ui);
    });
}

/// Render a row indented to line up with labeled rows
pub fn indented_row(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        add_contents(ui);
    });
}

/// A round toggle button, filled with the accent color when selected.
/// Used for the AM/PM switch and the recurrence day row.
pub fn pill_button(ui: &mut Ui, selected: bool, text: &str, theme: &AppTheme) -> Response {
    let (fill, text_color) = if selected {
        (theme.accent, theme.on_accent)
    } else {
        (theme.surface, theme.text_disabled)
    };

    ui.add(
        egui::Button::new(RichText::new(text).strong().color(text_color))
            .fill(fill)
            .stroke(Stroke::NONE)
            .rounding(Rounding::same(18.0))
            .min_size(Vec2::new(38.0, 38.0)),
    )
}

/// The chevron glyph for a collapsible card header
pub fn chevron(expanded: bool) -> &'static str {
    if expanded {
        "⏶"
    } else {
        "⏷"
    }
}

/// A full-width card that reports clicks, used for the collapsible
/// scene/sound menu headers.
pub fn menu_card(
    ui: &mut Ui,
    theme: &AppTheme,
    add_contents: impl FnOnce(&mut Ui),
) -> Response {
    let response = egui::Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response;
    response.interact(Sense::click())
}

/// Draw a two-stop vertical gradient swatch for a light scene
pub fn gradient_swatch(ui: &mut Ui, size: Vec2, top: Color32, bottom: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter();
    let mut upper = rect;
    upper.max.y = rect.center().y;
    let mut lower = rect;
    lower.min.y = rect.center().y;
    painter.rect_filled(upper, Rounding::ZERO, top);
    painter.rect_filled(lower, Rounding::ZERO, bottom);
}
