//! Reusable UI components and formatting helpers

use crate::types::{GameSettings, StatusKind};

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

/// Format a tile value with thousands separators, e.g. 2048 -> "2,048".
pub fn format_tile_value(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "width x height" label shown in the header, e.g. "4×4".
pub fn size_label(settings: &GameSettings) -> String {
    format!("{}×{}", settings.width, settings.height)
}

/// Square cell edge for the configured grid, computed once per game from the
/// viewport width available at board-creation time. The board caps out at
/// 400px on wide windows.
pub fn compute_cell_size(available_width: f32, settings: &GameSettings) -> f32 {
    let max_board = available_width.min(400.0);
    let longest_edge = settings.width.max(settings.height).max(1) as f32;
    ((max_board / longest_edge).floor() - 4.0).max(16.0)
}

/// Tile label font size, stepped down as labels get wider so four- and
/// five-digit values still fit the cell.
pub fn tile_font_size(cell_size: f32, label_len: usize) -> f32 {
    let factor = match label_len {
        0..=2 => 0.45,
        3..=4 => 0.35,
        5 => 0.28,
        _ => 0.22,
    };
    cell_size * factor
}

/// Phosphor icon shown next to a status toast.
pub fn status_icon(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
        StatusKind::Error => egui_phosphor::regular::WARNING,
        StatusKind::Info => egui_phosphor::regular::INFO,
    }
}
