//! Application shell: window layout, screen routing, and the alarm
//! dialog host.

mod discover;
mod home;
mod navigation;
mod profile;
mod state;
mod toast;

use crate::models::alarm::AlarmConfig;
use crate::models::catalog::Catalogs;
use crate::models::room::{builtin_rooms, builtin_time_cards, Room, TimeCard};
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::alarm_dialog::{render_alarm_dialog, AlarmDialogState};
use crate::ui_egui::theme::AppTheme;

use self::state::{HomeTab, NavigationTab};
use self::toast::Toast;

pub struct DaylightApp {
    /// Persisted user preferences
    settings: Settings,
    /// Currently applied theme colors
    active_theme: AppTheme,
    /// Read-only scene/sound tables injected into the alarm dialog
    catalogs: Catalogs,
    rooms: Vec<Room>,
    time_cards: Vec<TimeCard>,
    nav_tab: NavigationTab,
    home_tab: HomeTab,
    show_alarm_dialog: bool,
    /// Draft state; exists only while the dialog is open
    alarm_dialog_state: Option<AlarmDialogState>,
    toast: Option<Toast>,
}

impl DaylightApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = SettingsService::load();
        let active_theme = AppTheme::from_preference(settings.theme);
        active_theme.apply(&cc.egui_ctx);
        log::info!("Loaded settings: {:?}", settings);

        Self {
            settings,
            active_theme,
            catalogs: Catalogs::builtin(),
            rooms: builtin_rooms(),
            time_cards: builtin_time_cards(),
            nav_tab: NavigationTab::Home,
            home_tab: HomeTab::Rooms,
            show_alarm_dialog: false,
            alarm_dialog_state: None,
            toast: None,
        }
    }

    fn open_alarm_dialog(&mut self) {
        self.alarm_dialog_state = Some(AlarmDialogState::new(&self.catalogs));
        self.show_alarm_dialog = true;
    }

    /// The host's save callback: log the snapshot and confirm.
    /// Nothing is stored; the snapshot is the whole contract.
    fn handle_alarm_saved(&mut self, config: AlarmConfig) {
        match serde_json::to_string(&config) {
            Ok(payload) => log::info!("Alarm saved: {}", payload),
            Err(err) => log::warn!("Alarm saved but payload failed to serialize: {}", err),
        }
        self.toast = Some(Toast::new("Alarm saved"));
    }

    fn render_alarm_dialog_if_open(&mut self, ctx: &egui::Context) {
        if !self.show_alarm_dialog {
            return;
        }

        let state = self
            .alarm_dialog_state
            .get_or_insert_with(|| AlarmDialogState::new(&self.catalogs));

        let result = render_alarm_dialog(
            ctx,
            state,
            &self.catalogs,
            &self.active_theme,
            &mut self.show_alarm_dialog,
        );

        if let Some(config) = result.saved {
            self.handle_alarm_saved(config);
        }

        if result.closed {
            // Saved or dismissed, the draft is discarded either way
            self.alarm_dialog_state = None;
        }
    }
}

impl eframe::App for DaylightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.toast.as_ref().map_or(false, Toast::expired) {
            self.toast = None;
        }

        self.render_bottom_navigation(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::symmetric(20.0, 16.0)),
            )
            .show(ctx, |ui| match self.nav_tab {
                NavigationTab::Home => self.render_home(ui),
                NavigationTab::Discover => self.render_discover(ui),
                NavigationTab::Profile => self.render_profile(ui),
            });

        self.render_alarm_dialog_if_open(ctx);

        if let Some(toast) = &self.toast {
            toast::render_toast(ctx, &self.active_theme, toast);
            // Keep repainting so the toast disappears without input
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
