//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_WOOD: Color32 = Color32::from_rgb(219, 180, 128);
pub const LINE_COLOR: Color32 = Color32::from_rgb(62, 42, 22);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(24, 24, 28);
pub const BLACK_STONE_SHEEN: Color32 = Color32::from_rgb(72, 72, 82);
pub const WHITE_STONE: Color32 = Color32::from_rgb(249, 249, 251);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(188, 188, 194);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(226, 64, 56);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 214, 70);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(24, 26, 30);
pub const CARD_BG: Color32 = Color32::from_rgb(34, 37, 42);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(238, 240, 244);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 163, 173);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(118, 123, 133);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(76, 198, 118);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(252, 178, 48);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Star point positions for a 15x15 board (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
