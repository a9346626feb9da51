//! App module - contains the main application state and logic

mod state;

pub use state::ShowcaseState;

use crate::settings::Settings;
use crate::store::KvStore;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// How long the like-count label stays emphasized after a click
pub const LIKE_PULSE_SECS: f32 = 0.3;

pub struct App {
    pub(crate) state: ShowcaseState,
    pub(crate) focus_search: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Like pulse: (project id, click instant)
    pub(crate) like_pulse: Option<(i64, Instant)>,
    // Window tracking for saving geometry on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, store: Box<dyn KvStore>, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let state = ShowcaseState::new(store);

        // Restored theme must be applied before the first frame
        theme::apply_visuals(&cc.egui_ctx, state.theme_mode);

        Self {
            state,
            focus_search: false,
            logo_texture: None,
            like_pulse: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.state.toggle_theme();
        theme::apply_visuals(ctx, self.state.theme_mode);
    }

    pub fn open_project_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(url, error = %e, "Failed to open project link");
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
