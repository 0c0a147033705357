//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors with better contrast
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Button colors
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const HISTORY_CURRENT: Color32 = Color32::from_rgb(70, 90, 130);

// Status colors
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points (hoshi) for a board of the given size: the center plus the
/// four points three lines in from each corner on boards large enough.
pub fn star_points(size: usize) -> Vec<(usize, usize)> {
    if size % 2 == 0 || size < 7 {
        return Vec::new();
    }
    let center = size / 2;
    let mut points = vec![(center, center)];
    if size >= 13 {
        let near = 3;
        let far = size - 4;
        points.extend([(near, near), (near, far), (far, near), (far, far)]);
    }
    points
}

/// Column caption: letters A-Z, then numbers
pub fn column_label(col: usize) -> String {
    if col < 26 {
        char::from(b'A' + col as u8).to_string()
    } else {
        (col + 1).to_string()
    }
}
