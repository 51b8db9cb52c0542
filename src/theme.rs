//! Centralized theme constants for the 2048 client
//! All colors, sizes, and styling should reference these constants

use crate::types::StatusKind;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds (classic warm 2048 palette)
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xfa, 0xf8, 0xef);
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0xf5, 0xf0, 0xe4);
pub const BG_INPUT: Color32 = Color32::from_rgb(0xff, 0xfd, 0xf8);
pub const BOARD_BG: Color32 = Color32::from_rgb(0xbb, 0xad, 0xa0);
pub const CELL_EMPTY: Color32 = Color32::from_rgb(0xcd, 0xc1, 0xb4);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x77, 0x6e, 0x65);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xf9, 0xf6, 0xf2);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa3, 0x9a, 0x90);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0xb5, 0xab, 0x9f);

// =============================================================================
// COLORS - Accent & borders
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xf6, 0x7c, 0x5f);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe5, 0xdd, 0xd0);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xd6, 0xcd, 0xc0);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x8f, 0x7a, 0x66);
pub const BTN_DEFAULT_HOVER: Color32 = Color32::from_rgb(0x9f, 0x8b, 0x77);
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0xf6, 0x7c, 0x5f);
pub const BTN_ACCENT_HOVER: Color32 = Color32::from_rgb(0xf6, 0x5e, 0x3b);
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0xd6, 0xcd, 0xc0);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x05, 0x96, 0x69); // emerald-600
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600
pub const STATUS_INFO: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600

pub fn status_color(kind: StatusKind) -> Color32 {
    match kind {
        StatusKind::Success => STATUS_SUCCESS,
        StatusKind::Error => STATUS_ERROR,
        StatusKind::Info => STATUS_INFO,
    }
}

// =============================================================================
// COLORS - Tiles
// =============================================================================

/// Returns (background, text) for a tile value. 0 is the empty-cell color;
/// anything past 2048 shares the dark "super" tile style.
pub fn tile_colors(value: u32) -> (Color32, Color32) {
    match value {
        0 => (CELL_EMPTY, Color32::TRANSPARENT),
        2 => (Color32::from_rgb(0xee, 0xe4, 0xda), TEXT_PRIMARY),
        4 => (Color32::from_rgb(0xed, 0xe0, 0xc8), TEXT_PRIMARY),
        8 => (Color32::from_rgb(0xf2, 0xb1, 0x79), TEXT_LIGHT),
        16 => (Color32::from_rgb(0xf5, 0x95, 0x63), TEXT_LIGHT),
        32 => (Color32::from_rgb(0xf6, 0x7c, 0x5f), TEXT_LIGHT),
        64 => (Color32::from_rgb(0xf6, 0x5e, 0x3b), TEXT_LIGHT),
        128 => (Color32::from_rgb(0xed, 0xcf, 0x72), TEXT_LIGHT),
        256 => (Color32::from_rgb(0xed, 0xcc, 0x61), TEXT_LIGHT),
        512 => (Color32::from_rgb(0xed, 0xc8, 0x50), TEXT_LIGHT),
        1024 => (Color32::from_rgb(0xed, 0xc5, 0x3f), TEXT_LIGHT),
        2048 => (Color32::from_rgb(0xed, 0xc2, 0x2e), TEXT_LIGHT),
        _ => (Color32::from_rgb(0x3c, 0x3a, 0x32), TEXT_LIGHT),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const BOARD_GAP: f32 = 8.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        override_text_color: Some(TEXT_PRIMARY),
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0xe8, 0xdc, 0xc8),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: Color32::from_rgb(0xef, 0xe8, 0xd9),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0xe8, 0xe0, 0xd0),
                weak_bg_fill: Color32::from_rgb(0xe8, 0xe0, 0xd0),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Framed card for the header stat labels (target tile, board size).
pub fn stat_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BOARD_BG)
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(14, 8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default brown button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_LIGHT))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent orange button (for primary actions like Start / AI move)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_LIGHT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}
