//! Client-side game session state
//!
//! The server owns the rules; this tracks only what the UI needs to know:
//! the settings chosen at setup, the last board the server reported, whether
//! input is currently accepted, and the terminal outcome if one was reached.
//! The active flag is false exactly while a win/loss dialog (or the setup
//! dialog) is in front of the board.

use crate::types::{Board, GameSettings, GameState};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Default)]
pub struct Session {
    pub settings: GameSettings,
    pub board: Option<Board>,
    active: bool,
    outcome: Option<Outcome>,
}

impl Session {
    /// A freshly started game: no board fetched yet, input accepted.
    pub fn start(settings: GameSettings) -> Self {
        Self {
            settings,
            board: None,
            active: true,
            outcome: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Replace the cached board with a freshly fetched copy.
    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    /// Tile value at (row, col); out-of-range reads as empty, so a board
    /// smaller than the configured grid never panics the painter.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.board
            .as_ref()
            .and_then(|b| b.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Apply a `/get_game_state` fetch. Win takes priority when the server
    /// reports both flags in the same response. Reaching either outcome
    /// stops accepting input.
    pub fn apply_state(&mut self, state: GameState) -> Option<Outcome> {
        let outcome = if state.is_win {
            Some(Outcome::Win)
        } else if state.is_gameover {
            Some(Outcome::Loss)
        } else {
            None
        };
        if let Some(o) = outcome {
            self.outcome = Some(o);
            self.active = false;
        }
        outcome
    }

    /// Return to play, e.g. after a successful undo from the game-over
    /// dialog.
    pub fn resume(&mut self) {
        self.outcome = None;
        self.active = true;
    }

    /// Restart keeps the settings but drops the board and outcome until the
    /// server reports the fresh state.
    pub fn restart(&mut self) {
        self.board = None;
        self.outcome = None;
        self.active = true;
    }

    /// Stop accepting input while the setup dialog covers the board. A
    /// terminal outcome is kept so dismissing the dialog brings the win/loss
    /// dialog back instead of a finished game.
    pub fn suspend(&mut self) {
        self.active = false;
    }

    /// Reopen the board after the setup dialog is dismissed without starting
    /// a game. Input resumes only if the game had not already finished.
    pub fn unsuspend(&mut self) {
        self.active = self.outcome.is_none();
    }
}
