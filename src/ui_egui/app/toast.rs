//! Brief, non-blocking confirmation message shown after saving an alarm.

use std::time::{Duration, Instant};

use egui::{RichText, Rounding};

use crate::ui_egui::theme::AppTheme;

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A transient confirmation message
pub struct Toast {
    message: String,
    created: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= TOAST_DURATION
    }
}

/// Draw the toast floating above the bottom navigation bar
pub(super) fn render_toast(ctx: &egui::Context, theme: &AppTheme, toast: &Toast) {
    egui::Area::new(egui::Id::new("save_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -72.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.success_background)
                .rounding(Rounding::same(12.0))
                .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("✓ {}", toast.message()))
                            .strong()
                            .color(theme.success_text),
                    );
                });
        });
}
