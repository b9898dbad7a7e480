//! Home screen: header with the add-alarm button, Rooms/Products tab bar,
//! scheduled time cards, and the room list.

use chrono::Local;
use egui::{Color32, RichText, Rounding, Sense};

use crate::models::room::{Room, TimeCard};
use crate::ui_egui::theme::{parse_hex_color, AppTheme};

use super::state::HomeTab;
use super::DaylightApp;

/// Text color drawn on top of the colored room cards
const ROOM_CARD_TEXT: Color32 = Color32::from_rgb(25, 25, 25);

impl DaylightApp {
    pub(super) fn render_home(&mut self, ui: &mut egui::Ui) {
        self.render_home_header(ui);
        self.render_home_tab_bar(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.columns(2, |columns| {
                    for (index, card) in self.time_cards.iter().enumerate() {
                        render_time_card(&mut columns[index % 2], card, &self.active_theme);
                    }
                });
                ui.add_space(16.0);

                match self.home_tab {
                    HomeTab::Rooms => {
                        for room in &self.rooms {
                            render_room_card(ui, room, &self.active_theme);
                        }
                    }
                    HomeTab::Products => {
                        ui.label(
                            RichText::new("No products yet.")
                                .color(self.active_theme.text_secondary),
                        );
                    }
                }
            });
    }

    fn render_home_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Home").size(32.0).strong());
                ui.label(
                    RichText::new(Local::now().format("%A, %B %-d").to_string())
                        .small()
                        .color(self.active_theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = ui
                    .add(egui::Button::new(RichText::new("＋").size(26.0)).frame(false))
                    .on_hover_text("New wake-up alarm");
                if add.clicked() {
                    self.open_alarm_dialog();
                }
            });
        });
        ui.add_space(8.0);
    }

    fn render_home_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in HomeTab::ALL {
                let active = self.home_tab == tab;
                let text = if active {
                    RichText::new(tab.label())
                        .strong()
                        .color(self.active_theme.text_primary)
                } else {
                    RichText::new(tab.label()).color(self.active_theme.text_disabled)
                };
                if ui.selectable_label(active, text).clicked() {
                    self.home_tab = tab;
                }
            }
        });
        ui.add_space(12.0);
    }
}

fn render_time_card(ui: &mut egui::Ui, card: &TimeCard, theme: &AppTheme) {
    egui::Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(16.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(theme.surface_raised)
                    .rounding(Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(card.icon).size(16.0));
                    });
                ui.vertical(|ui| {
                    ui.label(RichText::new(card.title).strong());
                    ui.label(
                        RichText::new(card.subtitle)
                            .small()
                            .color(theme.text_secondary),
                    );
                });
            });
        });
}

fn render_room_card(ui: &mut egui::Ui, room: &Room, theme: &AppTheme) {
    let fill = parse_hex_color(room.accent).unwrap_or(theme.surface);

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(16.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(110.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(room.icon).size(20.0));
                ui.label(
                    RichText::new(room.name)
                        .size(18.0)
                        .strong()
                        .color(ROOM_CARD_TEXT),
                );
            });

            if room.has_device {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    egui::Frame::none()
                        .fill(theme.surface_raised)
                        .rounding(Rounding::same(16.0))
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new("💡").size(14.0));
                        });
                });
            }
        })
        .response
        .interact(Sense::click());

    if response.clicked() {
        log::info!("Room pressed: {}", room.id);
    }
    ui.add_space(12.0);
}
