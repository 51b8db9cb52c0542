//! Application constants and configuration

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds a status toast stays on screen. The last `TOAST_FADE_SECS` of
/// that window fade out, so removal lands exactly on the limit.
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;

/// Win-tile choices offered by the setup dialog.
pub const WIN_TILE_CHOICES: [u32; 6] = [256, 512, 1024, 2048, 4096, 8192];

/// Largest board edge the setup dialog lets you drag to. The server imposes
/// no cap; this only keeps tiles readable on screen.
pub const MAX_BOARD_EDGE: u32 = 16;
