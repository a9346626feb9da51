#![windows_subsystem = "windows"]
//! Devfolio - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod projects;
mod settings;
mod store;
mod theme;
mod ui;
mod utils;

use app::{App, LIKE_PULSE_SECS};
use constants::APP_VERSION;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use store::SqliteStore;
use tracing::{error, info};
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "devfolio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,devfolio=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Devfolio");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Devfolio starting");

    let store_path = data_dir.join("devfolio.db");
    let store = match SqliteStore::open(&store_path) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, path = %store_path.display(), "Failed to open store");
            panic!("Failed to open store: {}", e);
        }
    };

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1000.0, 720.0)))
        .with_min_inner_size([640.0, 480.0])
        .with_title("Devfolio");

    // Window/taskbar icon from the embedded SVG logo
    {
        let (rgba, w, h) = utils::rasterize_logo(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Devfolio",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, Box::new(store), data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Expire the like pulse, repainting while it runs
        if let Some((_, started)) = self.like_pulse {
            if started.elapsed().as_secs_f32() >= LIKE_PULSE_SECS {
                self.like_pulse = None;
            } else {
                ctx.request_repaint();
            }
        }

        self.render_header(ctx);

        let p = theme::palette(self.state.theme_mode);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(p.bg_base)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                if self.state.filtered_indices.is_empty() {
                    self.render_empty_state(ui);
                } else {
                    self.render_cards(ui);
                }
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// VIEW RENDERING (Header, Cards, Empty State)
// ============================================================================

impl App {
    fn render_header(&mut self, ctx: &egui::Context) {
        let p = theme::palette(self.state.theme_mode);

        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(theme::header_frame(p))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(56);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(28.0, 28.0),
                    ));

                    ui.label(
                        egui::RichText::new("DEVFOLIO")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(p.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Theme toggle: the label names the mode it switches to
                        let (icon, label) = match self.state.theme_mode {
                            theme::ThemeMode::Dark => (egui_phosphor::regular::SUN, "Light"),
                            theme::ThemeMode::Light => (egui_phosphor::regular::MOON, "Dark"),
                        };
                        if ui
                            .add(theme::button(p, format!("{}  {}", icon, label)))
                            .clicked()
                        {
                            self.toggle_theme(ctx);
                        }

                        ui.add_space(theme::SPACING_MD);

                        let changed = components::search_field(
                            ui,
                            p,
                            &mut self.state.search_query,
                            &mut self.focus_search,
                        );
                        if changed {
                            self.state.apply_filter();
                        }
                    });
                });
            });
    }

    fn render_empty_state(&mut self, ui: &mut egui::Ui) {
        let p = theme::palette(self.state.theme_mode);

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                    .size(48.0)
                    .color(p.text_dim),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new("No projects found")
                    .size(16.0)
                    .color(p.text_muted),
            );
            ui.add_space(theme::SPACING_XL);
            if ui
                .add(theme::button(p, format!(
                    "{}  Clear Search",
                    egui_phosphor::regular::X
                )))
                .clicked()
            {
                self.state.search_query.clear();
                self.state.apply_filter();
            }
        });
    }

    fn render_cards(&mut self, ui: &mut egui::Ui) {
        let p = theme::palette(self.state.theme_mode);
        let spacing = theme::SPACING_MD;
        let available = ui.available_width();
        let num_cols = ((available + spacing) / (theme::CARD_MIN_WIDTH + spacing))
            .floor()
            .max(1.0);
        let card_w = ((available - spacing * (num_cols - 1.0)) / num_cols).floor();

        let mut liked: Option<i64> = None;
        let mut open_url: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

                    let indices = self.state.filtered_indices.clone();
                    for &idx in &indices {
                        let project = self.state.projects[idx].clone();
                        let pulsing = matches!(
                            self.like_pulse,
                            Some((id, started))
                                if id == project.id
                                    && started.elapsed().as_secs_f32() < LIKE_PULSE_SECS
                        );

                        ui.allocate_ui(egui::vec2(card_w, 0.0), |ui| {
                            ui.set_width(card_w);
                            theme::card_frame(p).show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(&project.title)
                                        .size(theme::FONT_TITLE)
                                        .strong()
                                        .color(p.text_primary),
                                );
                                ui.add_space(theme::SPACING_SM);
                                components::tech_badges(ui, p, &project.tech);
                                ui.add_space(theme::SPACING_SM);
                                ui.label(
                                    egui::RichText::new(&project.description)
                                        .size(theme::FONT_BODY)
                                        .color(p.text_muted),
                                );
                                ui.add_space(theme::SPACING_MD);

                                ui.horizontal(|ui| {
                                    if let Some(url) = &project.url {
                                        if ui
                                            .add(theme::button_accent(p, format!(
                                                "{}  View project",
                                                egui_phosphor::regular::ARROW_SQUARE_OUT
                                            )))
                                            .clicked()
                                        {
                                            open_url = Some(url.clone());
                                        }
                                    }

                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            components::like_count(
                                                ui,
                                                p,
                                                project.likes,
                                                pulsing,
                                            );
                                            if components::like_button(ui, p).clicked() {
                                                liked = Some(project.id);
                                            }
                                        },
                                    );
                                });
                            });
                        });
                    }
                });
            });

        if let Some(id) = liked {
            if self.state.like(id) {
                self.like_pulse = Some((id, Instant::now()));
            }
        }
        if let Some(url) = open_url {
            self.open_project_url(&url);
        }
    }
}
