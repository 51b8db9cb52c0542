//! App module - contains the main application state and logic

mod requests;

pub(crate) use requests::ServerEvent;

use crate::api::ApiClient;
use crate::session::Session;
use crate::settings::Settings;
use crate::theme;
use crate::toast::Toast;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) api: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Completed server requests, drained once per frame
    pub(crate) events: Arc<Mutex<Vec<ServerEvent>>>,
    pub(crate) request_in_flight: bool,
    pub(crate) ai_thinking: bool,
    // Setup dialog
    pub(crate) show_setup: bool,
    pub(crate) setup_height: u32,
    pub(crate) setup_width: u32,
    pub(crate) setup_win: u32,
    pub(crate) server_url: String,
    // Settings of the game currently being started, applied once the server
    // confirms it
    pub(crate) pending_settings: GameSettings,
    // Fixed at board-creation time, not recomputed on resize
    pub(crate) cell_size: f32,
    // Status toast
    pub(crate) toast: Option<Toast>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window geometry tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    fn with_settings(settings: Settings, data_dir: PathBuf) -> Self {
        let game = settings.game_settings();

        Self {
            session: Session::default(),
            api: ApiClient::new(&settings.server_url),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            events: Arc::new(Mutex::new(Vec::new())),
            request_in_flight: false,
            ai_thinking: false,
            show_setup: true,
            setup_height: game.height,
            setup_width: game.width,
            setup_win: game.win,
            server_url: settings.server_url,
            pending_settings: game,
            cell_size: 96.0,
            toast: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Show a transient status message. A newer message replaces the current
    /// one immediately and restarts the auto-hide timer.
    pub fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.toast = Some(Toast::new(message, kind));
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            server_url: self.server_url.clone(),
            board_height: self.setup_height,
            board_width: self.setup_width,
            win_tile: self.setup_win,
        };
        settings.save(&self.data_dir);
    }

    /// Whether a move command (keyboard or button) is currently accepted.
    pub fn accepts_moves(&self) -> bool {
        self.session.is_active() && !self.show_setup && !self.request_in_flight
    }
}
