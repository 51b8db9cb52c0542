//! Common types and data structures

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Board dimensions and target tile, captured by the setup dialog and fixed
/// for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSettings {
    pub height: u32,
    pub width: u32,
    pub win: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            height: 4,
            width: 4,
            win: 2048,
        }
    }
}

impl GameSettings {
    /// The server accepts any grid of at least 2x2; smaller boards are
    /// rejected here, before any request is issued.
    pub fn validate(&self) -> Result<(), String> {
        if self.height < 2 || self.width < 2 {
            return Err("Height and width must be at least 2!".to_string());
        }
        Ok(())
    }
}

/// Row-major grid of tile values. 0 is an empty cell, everything else is a
/// power of two. Entirely server-owned; the client only caches the last
/// fetched copy.
pub type Board = Vec<Vec<u32>>;

/// A directional move command, with the exact strings the server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    /// Keyboard binding: arrow keys and WASD. egui key identity already
    /// folds letter case, so `w` and `W` both arrive as `Key::W`.
    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
            egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
            egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
            egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Severity of a status toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// `{status, message?}` body returned by the mutating endpoints. A rejected
/// operation (illegal move, empty undo stack) is a normal response with a
/// non-success status, not a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl MoveResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// `/get_board_state` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardState {
    pub board: Board,
}

/// `/get_game_state` terminal-state flags.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GameState {
    pub is_win: bool,
    pub is_gameover: bool,
}
