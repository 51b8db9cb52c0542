//! Server request dispatch
//!
//! Every handler spawns one task on the app's runtime that performs its
//! whole request/refresh sequence and pushes exactly one completion event;
//! the UI drains the queue at the top of each frame. The in-flight flag
//! keeps mutating requests strictly sequential, matching the one-at-a-time
//! interaction model the server assumes.

use super::App;
use crate::api::{ApiClient, ApiError};
use crate::session::Session;
use crate::types::*;
use crate::ui::components;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// What a move-shaped request produced: the server's verdict, plus the
/// refreshed board and terminal-state flags when the move was accepted.
pub(crate) struct MoveOutcome {
    pub response: MoveResponse,
    pub board: Option<Board>,
    pub state: Option<GameState>,
}

pub(crate) struct UndoOutcome {
    pub response: MoveResponse,
    pub board: Option<Board>,
}

pub(crate) enum ServerEvent {
    Started(Result<Board, ApiError>),
    Restarted(Result<Board, ApiError>),
    UserMoved(Result<MoveOutcome, ApiError>),
    AiMoved(Result<MoveOutcome, ApiError>),
    Undone {
        from_game_over: bool,
        result: Result<UndoOutcome, ApiError>,
    },
}

fn push_event(events: &Arc<Mutex<Vec<ServerEvent>>>, ctx: &egui::Context, event: ServerEvent) {
    events.lock().unwrap().push(event);
    ctx.request_repaint();
}

/// Accepted moves refresh the board and then the terminal-state flags in the
/// same task, so the UI applies them atomically.
async fn move_outcome(api: &ApiClient, response: MoveResponse) -> Result<MoveOutcome, ApiError> {
    if !response.is_success() {
        return Ok(MoveOutcome {
            response,
            board: None,
            state: None,
        });
    }
    let board = api.get_board_state().await?;
    let state = api.get_game_state().await?;
    Ok(MoveOutcome {
        response,
        board: Some(board),
        state: Some(state),
    })
}

// ============================================================================
// DISPATCH
// ============================================================================

impl App {
    /// Validate the setup form and start a new game. Invalid dimensions are
    /// rejected locally; no request leaves the client.
    pub fn start_new_game(&mut self, ctx: &egui::Context) {
        let settings = GameSettings {
            height: self.setup_height,
            width: self.setup_width,
            win: self.setup_win,
        };
        if let Err(msg) = settings.validate() {
            self.show_status(msg, StatusKind::Error);
            return;
        }
        if self.request_in_flight {
            return;
        }

        // The server URL may have been edited in the setup dialog
        self.api = ApiClient::new(&self.server_url);
        self.pending_settings = settings;
        self.request_in_flight = true;
        info!(
            height = settings.height,
            width = settings.width,
            win = settings.win,
            "Starting new game"
        );

        let api = self.api.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = async {
                api.start_new_game(&settings).await?;
                api.get_board_state().await
            }
            .await;
            push_event(&events, &ctx, ServerEvent::Started(result));
        });
    }

    pub fn restart_game(&mut self, ctx: &egui::Context) {
        if self.request_in_flight {
            return;
        }
        self.request_in_flight = true;
        info!("Restarting game");

        let api = self.api.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = async {
                api.restart_game().await?;
                api.get_board_state().await
            }
            .await;
            push_event(&events, &ctx, ServerEvent::Restarted(result));
        });
    }

    pub fn make_user_move(&mut self, direction: Direction, ctx: &egui::Context) {
        if !self.accepts_moves() {
            return;
        }
        self.request_in_flight = true;
        info!(direction = direction.as_str(), "Dispatching user move");

        let api = self.api.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let response = api.make_user_move(direction).await?;
                move_outcome(&api, response).await
            }
            .await;
            push_event(&events, &ctx, ServerEvent::UserMoved(result));
        });
    }

    /// The AI button stays disabled and the busy spinner visible until the
    /// completion event arrives; the event is pushed on success and failure
    /// alike, so the indicator is always released.
    pub fn make_ai_move(&mut self, ctx: &egui::Context) {
        if !self.accepts_moves() || self.ai_thinking {
            return;
        }
        self.request_in_flight = true;
        self.ai_thinking = true;
        info!("Dispatching AI move");

        let api = self.api.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let response = api.make_ai_move().await?;
                move_outcome(&api, response).await
            }
            .await;
            push_event(&events, &ctx, ServerEvent::AiMoved(result));
        });
    }

    /// `from_game_over` marks an undo issued from the game-over dialog; on
    /// success it also closes that dialog and re-enables input.
    pub fn undo_move(&mut self, from_game_over: bool, ctx: &egui::Context) {
        if !from_game_over && !self.accepts_moves() {
            return;
        }
        if self.request_in_flight {
            return;
        }
        self.request_in_flight = true;
        info!(from_game_over, "Dispatching undo");

        let api = self.api.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let response = api.undo().await?;
                if !response.is_success() {
                    return Ok(UndoOutcome {
                        response,
                        board: None,
                    });
                }
                let board = api.get_board_state().await?;
                Ok(UndoOutcome {
                    response,
                    board: Some(board),
                })
            }
            .await;
            push_event(
                &events,
                &ctx,
                ServerEvent::Undone {
                    from_game_over,
                    result,
                },
            );
        });
    }

    // ========================================================================
    // EVENT DRAIN
    // ========================================================================

    /// Apply completed requests to the session and UI state. Runs at the top
    /// of every frame.
    pub fn poll_server_events(&mut self, ctx: &egui::Context) {
        let drained: Vec<ServerEvent> = {
            let mut events = self.events.lock().unwrap();
            events.drain(..).collect()
        };

        for event in drained {
            self.request_in_flight = false;
            match event {
                ServerEvent::Started(Ok(board)) => {
                    let mut session = Session::start(self.pending_settings);
                    session.set_board(board);
                    self.session = session;
                    // Cell size is fixed for the lifetime of the game
                    self.cell_size = components::compute_cell_size(
                        ctx.screen_rect().width() - 100.0,
                        &self.pending_settings,
                    );
                    self.show_setup = false;
                    info!("New game confirmed by server");
                    self.show_status("New game started!", StatusKind::Success);
                }
                ServerEvent::Started(Err(e)) => {
                    error!(error = %e, "Failed to start game");
                    let msg = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Error starting game".to_string());
                    self.show_status(msg, StatusKind::Error);
                }
                ServerEvent::Restarted(Ok(board)) => {
                    self.session.restart();
                    self.session.set_board(board);
                    self.show_status("Game restarted!", StatusKind::Success);
                }
                ServerEvent::Restarted(Err(e)) => {
                    error!(error = %e, "Failed to restart game");
                    self.show_status("Error restarting game", StatusKind::Error);
                }
                ServerEvent::UserMoved(Ok(outcome)) => {
                    if outcome.response.is_success() {
                        self.apply_move_outcome(outcome);
                    } else {
                        // Rejected move: non-fatal, game stays active
                        let msg = outcome
                            .response
                            .message
                            .unwrap_or_else(|| "That move is not possible!".to_string());
                        warn!(message = %msg, "Move rejected by server");
                        self.show_status(msg, StatusKind::Error);
                    }
                }
                ServerEvent::UserMoved(Err(e)) => {
                    error!(error = %e, "User move failed");
                    self.show_status("Error making move", StatusKind::Error);
                }
                ServerEvent::AiMoved(result) => {
                    self.ai_thinking = false;
                    match result {
                        Ok(outcome) if outcome.response.is_success() => {
                            let msg = outcome
                                .response
                                .message
                                .clone()
                                .unwrap_or_else(|| "AI made a move!".to_string());
                            self.apply_move_outcome(outcome);
                            self.show_status(msg, StatusKind::Info);
                        }
                        Ok(outcome) => {
                            let msg = outcome
                                .response
                                .message
                                .unwrap_or_else(|| "No moves available for AI!".to_string());
                            warn!(message = %msg, "AI move rejected by server");
                            self.show_status(msg, StatusKind::Error);
                        }
                        Err(e) => {
                            error!(error = %e, "AI move failed");
                            self.show_status("Error making AI move", StatusKind::Error);
                        }
                    }
                }
                ServerEvent::Undone {
                    from_game_over,
                    result,
                } => match result {
                    Ok(outcome) if outcome.response.is_success() => {
                        if from_game_over {
                            self.session.resume();
                        }
                        if let Some(board) = outcome.board {
                            self.session.set_board(board);
                        }
                        let msg = outcome
                            .response
                            .message
                            .unwrap_or_else(|| "Move undone!".to_string());
                        self.show_status(msg, StatusKind::Success);
                    }
                    Ok(outcome) => {
                        let msg = outcome
                            .response
                            .message
                            .unwrap_or_else(|| "No moves to undo!".to_string());
                        self.show_status(msg, StatusKind::Error);
                    }
                    Err(e) => {
                        error!(error = %e, "Undo failed");
                        self.show_status("Error undoing move", StatusKind::Error);
                    }
                },
            }
        }
    }

    fn apply_move_outcome(&mut self, outcome: MoveOutcome) {
        if let Some(board) = outcome.board {
            self.session.set_board(board);
        }
        if let Some(state) = outcome.state {
            if let Some(reached) = self.session.apply_state(state) {
                info!(?reached, "Game reached a terminal state");
            }
        }
    }
}
