use super::*;

// =============================================================
// Tile labels
// =============================================================

#[test]
fn small_values_have_no_separator() {
    assert_eq!(format_tile_value(2), "2");
    assert_eq!(format_tile_value(64), "64");
    assert_eq!(format_tile_value(512), "512");
}

#[test]
fn target_tile_label_uses_thousands_separator() {
    assert_eq!(format_tile_value(2048), "2,048");
    assert_eq!(format_tile_value(8192), "8,192");
    assert_eq!(format_tile_value(65536), "65,536");
}

#[test]
fn million_tile_gets_two_separators() {
    assert_eq!(format_tile_value(1048576), "1,048,576");
}

// =============================================================
// Size label
// =============================================================

#[test]
fn size_label_is_width_by_height() {
    let settings = GameSettings {
        height: 4,
        width: 4,
        win: 2048,
    };
    assert_eq!(size_label(&settings), "4×4");

    let tall = GameSettings {
        height: 8,
        width: 3,
        win: 2048,
    };
    assert_eq!(size_label(&tall), "3×8");
}

// =============================================================
// Cell sizing
// =============================================================

#[test]
fn cell_size_for_default_board_on_wide_window() {
    let settings = GameSettings::default();
    // Board caps at 400px: 400 / 4 - 4 = 96
    assert_eq!(compute_cell_size(1350.0, &settings), 96.0);
}

#[test]
fn cell_size_shrinks_on_narrow_windows() {
    let settings = GameSettings::default();
    // 300 / 4 - 4 = 71
    assert_eq!(compute_cell_size(300.0, &settings), 71.0);
}

#[test]
fn cell_size_follows_the_longest_edge() {
    let settings = GameSettings {
        height: 8,
        width: 2,
        win: 2048,
    };
    // 400 / 8 - 4 = 46
    assert_eq!(compute_cell_size(1000.0, &settings), 46.0);
}

#[test]
fn cell_size_never_collapses() {
    let settings = GameSettings {
        height: 16,
        width: 16,
        win: 2048,
    };
    assert!(compute_cell_size(50.0, &settings) >= 16.0);
}

#[test]
fn tile_font_shrinks_with_label_width() {
    let cell = 100.0;
    assert!(tile_font_size(cell, 1) > tile_font_size(cell, 4));
    assert!(tile_font_size(cell, 4) > tile_font_size(cell, 5));
    assert!(tile_font_size(cell, 5) > tile_font_size(cell, 9));
}
