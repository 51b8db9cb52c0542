#![windows_subsystem = "windows"]
//! 2048 Client - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod session;
mod settings;
mod theme;
mod toast;
mod types;
mod ui;

use app::App;
use constants::*;
use eframe::egui;
use session::Outcome;
use std::path::PathBuf;
use tracing::info;
use types::*;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "twenty48-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,twenty48_client=debug"));

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
        .join("2048 Client");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "2048 client starting");

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
        .with_inner_size(win_size.unwrap_or(egui::vec2(560.0, 780.0)))
        .with_min_inner_size([480.0, 640.0])
        .with_title("2048 Client");

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "2048 Client",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
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

        // Apply completed server requests
        self.poll_server_events(ctx);

        // Keyboard moves: arrows and WASD, only while a game is accepting
        // input and nothing else wants the keyboard
        if self.accepts_moves() && !ctx.wants_keyboard_input() {
            let direction = ctx.input(|i| {
                i.events.iter().find_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Direction::from_key(*key),
                    _ => None,
                })
            });
            if let Some(direction) = direction {
                self.make_user_move(direction, ctx);
            }
        }

        self.render_setup_modal(ctx);
        self.render_game_over_modal(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                if self.session.board.is_none() {
                    // Nothing to show until the first game starts
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Start a game to play")
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_DIM),
                        );
                    });
                    return;
                }

                self.render_header(ui, ctx);
                ui.add_space(theme::SPACING_XL);
                self.render_board(ui);
                ui.add_space(theme::SPACING_XL);
                self.render_controls(ui, ctx);
            });

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down, saving settings");
        self.save_settings();
    }
}

impl App {
    // ========================================================================
    // HEADER
    // ========================================================================

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            theme::stat_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("TARGET")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_LIGHT),
                    );
                    ui.label(
                        egui::RichText::new(components::format_tile_value(self.session.settings.win))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });
            theme::stat_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("BOARD")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_LIGHT),
                    );
                    ui.label(
                        egui::RichText::new(components::size_label(&self.session.settings))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(
                        !self.request_in_flight,
                        theme::button(format!("{}  New Game", egui_phosphor::regular::PLUS)),
                    )
                    .clicked()
                {
                    self.session.suspend();
                    self.show_setup = true;
                }
                if ui
                    .add_enabled(
                        !self.request_in_flight,
                        theme::button(format!(
                            "{}  Restart",
                            egui_phosphor::regular::ARROW_CLOCKWISE
                        )),
                    )
                    .clicked()
                {
                    self.restart_game(ctx);
                }
            });
        });
    }

    // ========================================================================
    // BOARD
    // ========================================================================

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let settings = self.session.settings;
        let cell = self.cell_size;
        let gap = theme::BOARD_GAP;
        let board_w = settings.width as f32 * cell + (settings.width + 1) as f32 * gap;
        let board_h = settings.height as f32 * cell + (settings.height + 1) as f32 * gap;

        ui.vertical_centered(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(board_w, board_h), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, theme::RADIUS_MEDIUM, theme::BOARD_BG);

            for row in 0..settings.height as usize {
                for col in 0..settings.width as usize {
                    let min = rect.min
                        + egui::vec2(
                            gap + col as f32 * (cell + gap),
                            gap + row as f32 * (cell + gap),
                        );
                    let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell, cell));
                    let value = self.session.tile(row, col);
                    let (bg, fg) = theme::tile_colors(value);
                    painter.rect_filled(cell_rect, theme::RADIUS_DEFAULT, bg);

                    if value > 0 {
                        let label = components::format_tile_value(value);
                        let font_size = components::tile_font_size(cell, label.len());
                        painter.text(
                            cell_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            label,
                            egui::FontId::proportional(font_size),
                            fg,
                        );
                    }
                }
            }
        });
    }

    // ========================================================================
    // CONTROLS
    // ========================================================================

    fn render_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let move_enabled = self.accepts_moves();
        let btn_size = egui::vec2(64.0, theme::BUTTON_HEIGHT);

        // Directional pad
        ui.vertical_centered(|ui| {
            let mut requested: Option<Direction> = None;
            ui.horizontal(|ui| {
                let pad = (ui.available_width() - btn_size.x) / 2.0;
                ui.add_space(pad.max(0.0));
                if ui
                    .add_enabled(
                        move_enabled,
                        theme::button(egui_phosphor::regular::ARROW_UP).min_size(btn_size),
                    )
                    .clicked()
                {
                    requested = Some(Direction::Up);
                }
            });
            ui.horizontal(|ui| {
                let row_w = btn_size.x * 3.0 + ui.spacing().item_spacing.x * 2.0;
                let pad = (ui.available_width() - row_w) / 2.0;
                ui.add_space(pad.max(0.0));
                if ui
                    .add_enabled(
                        move_enabled,
                        theme::button(egui_phosphor::regular::ARROW_LEFT).min_size(btn_size),
                    )
                    .clicked()
                {
                    requested = Some(Direction::Left);
                }
                if ui
                    .add_enabled(
                        move_enabled,
                        theme::button(egui_phosphor::regular::ARROW_DOWN).min_size(btn_size),
                    )
                    .clicked()
                {
                    requested = Some(Direction::Down);
                }
                if ui
                    .add_enabled(
                        move_enabled,
                        theme::button(egui_phosphor::regular::ARROW_RIGHT).min_size(btn_size),
                    )
                    .clicked()
                {
                    requested = Some(Direction::Right);
                }
            });
            if let Some(direction) = requested {
                self.make_user_move(direction, ctx);
            }
        });

        ui.add_space(theme::SPACING_LG);

        // AI move and undo
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let row_w = 260.0;
                let pad = (ui.available_width() - row_w) / 2.0;
                ui.add_space(pad.max(0.0));

                if ui
                    .add_enabled(
                        move_enabled && !self.ai_thinking,
                        theme::button_accent(format!(
                            "{}  AI Move",
                            egui_phosphor::regular::ROBOT
                        )),
                    )
                    .clicked()
                {
                    self.make_ai_move(ctx);
                }
                if ui
                    .add_enabled(
                        move_enabled,
                        theme::button(format!(
                            "{}  Undo",
                            egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                        )),
                    )
                    .clicked()
                {
                    self.undo_move(false, ctx);
                }
                if self.ai_thinking {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("AI is thinking...")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                }
            });
        });
    }

    // ========================================================================
    // SETUP MODAL
    // ========================================================================

    fn render_setup_modal(&mut self, ctx: &egui::Context) {
        if !self.show_setup {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("setup_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(300.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("New Game")
                        .size(theme::FONT_TITLE)
                        .strong(),
                );
            });
            ui.add_space(theme::SPACING_LG);

            egui::Grid::new("setup_grid")
                .num_columns(2)
                .spacing([theme::SPACING_XL, theme::SPACING_MD])
                .show(ui, |ui| {
                    ui.label("Height");
                    ui.add(egui::DragValue::new(&mut self.setup_height).range(1..=MAX_BOARD_EDGE));
                    ui.end_row();

                    ui.label("Width");
                    ui.add(egui::DragValue::new(&mut self.setup_width).range(1..=MAX_BOARD_EDGE));
                    ui.end_row();

                    ui.label("Win tile");
                    egui::ComboBox::from_id_salt("win_tile")
                        .selected_text(components::format_tile_value(self.setup_win))
                        .show_ui(ui, |ui| {
                            for &choice in &WIN_TILE_CHOICES {
                                ui.selectable_value(
                                    &mut self.setup_win,
                                    choice,
                                    components::format_tile_value(choice),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Server");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.server_url)
                            .desired_width(160.0)
                            .hint_text(DEFAULT_SERVER_URL),
                    );
                    ui.end_row();
                });

            ui.add_space(theme::SPACING_XL);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.request_in_flight {
                        ui.spinner();
                        ui.label("Starting game...");
                    } else {
                        if ui
                            .add(theme::button_accent(format!(
                                "{}  Start",
                                egui_phosphor::regular::PLAY
                            )))
                            .clicked()
                        {
                            self.start_new_game(ctx);
                        }
                        if self.session.board.is_some()
                            && ui
                                .add(theme::button(format!(
                                    "{}  Back",
                                    egui_phosphor::regular::X
                                )))
                                .clicked()
                        {
                            self.show_setup = false;
                            self.session.unsuspend();
                        }
                    }
                });
            });
        });

        // Escape / outside click returns to the running game, if there is one
        if modal_response.should_close() && self.session.board.is_some() && !self.request_in_flight
        {
            self.show_setup = false;
            self.session.unsuspend();
        }
    }

    // ========================================================================
    // GAME OVER MODAL
    // ========================================================================

    fn render_game_over_modal(&mut self, ctx: &egui::Context) {
        if self.show_setup {
            return;
        }
        let Some(outcome) = self.session.outcome() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("game_over_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());
        modal.show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(300.0);

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_MD);
                match outcome {
                    Outcome::Win => {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::TROPHY)
                                .size(40.0)
                                .color(theme::ACCENT),
                        );
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new("Congratulations!")
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.label(format!(
                            "You reached the {} tile!",
                            components::format_tile_value(self.session.settings.win)
                        ));
                    }
                    Outcome::Loss => {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::SKULL)
                                .size(40.0)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new("Game Over")
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.label("No more moves possible!");
                    }
                }
                ui.add_space(theme::SPACING_XL);

                ui.horizontal(|ui| {
                    let row_w = 270.0;
                    let pad = (ui.available_width() - row_w) / 2.0;
                    ui.add_space(pad.max(0.0));

                    if self.request_in_flight {
                        ui.spinner();
                    } else {
                        if ui
                            .add(theme::button(format!(
                                "{}  Undo",
                                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                            )))
                            .clicked()
                        {
                            self.undo_move(true, ctx);
                        }
                        if ui
                            .add(theme::button(format!(
                                "{}  Restart",
                                egui_phosphor::regular::ARROW_CLOCKWISE
                            )))
                            .clicked()
                        {
                            // The session stays finished until the server
                            // confirms the restart
                            self.restart_game(ctx);
                        }
                        if ui
                            .add(theme::button_accent(format!(
                                "{}  New Game",
                                egui_phosphor::regular::PLUS
                            )))
                            .clicked()
                        {
                            self.session.suspend();
                            self.show_setup = true;
                        }
                    }
                });
                ui.add_space(theme::SPACING_SM);
            });
        });
    }

    // ========================================================================
    // STATUS TOAST
    // ========================================================================

    fn render_toast(&mut self, ctx: &egui::Context) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
            return;
        }
        let Some(toast) = &self.toast else {
            return;
        };
        let Some(panel_rect) = self.central_panel_rect else {
            return;
        };
        let Some(alpha) = toast.alpha() else {
            return;
        };

        let accent = theme::status_color(toast.kind());
        let toast_pos = egui::pos2(panel_rect.center().x, panel_rect.bottom() - 12.0);

        egui::Area::new(egui::Id::new("status_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x77,
                        0x6e,
                        0x65,
                        (235.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            accent.r(),
                            accent.g(),
                            accent.b(),
                            (160.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(components::status_icon(toast.kind())).color(
                                egui::Color32::from_rgba_unmultiplied(
                                    accent.r(),
                                    accent.g(),
                                    accent.b(),
                                    (255.0 * alpha) as u8,
                                ),
                            ));
                            ui.label(egui::RichText::new(toast.message()).color(
                                egui::Color32::from_rgba_unmultiplied(
                                    0xf9,
                                    0xf6,
                                    0xf2,
                                    (255.0 * alpha) as u8,
                                ),
                            ));
                        });
                    });
            });

        ctx.request_repaint();
    }
}
