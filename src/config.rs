//! Game constants: world geometry, timing, and glyphs.

use ratatui::symbols::border;

/// Default world width in world units.
pub const WORLD_WIDTH: i32 = 600;

/// Default world height in world units.
pub const WORLD_HEIGHT: i32 = 600;

/// Grid step: the side of one cell, and the distance moved per tick.
pub const SEGMENT_SIZE: i32 = 20;

/// Segment count for a freshly built snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Gameplay tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Ticks spent in the post-crash pause before the snake is rebuilt.
/// 10 ticks at the default interval reproduces the original one-second pause.
pub const RESET_PAUSE_TICKS: u8 = 10;

/// Input poll timeout per loop iteration in milliseconds; keeps the loop
/// from spinning while staying responsive between ticks.
pub const INPUT_POLL_MS: u64 = 16;

/// Terminal columns per grid cell. Two columns per cell keeps cells roughly
/// square and leaves room for double-width glyphs.
pub const CELL_COLUMNS: u16 = 2;

/// Food glyph: the food sprite is a mouse.
pub const GLYPH_FOOD: &str = "🐭";

/// Body segment glyph filling one two-column cell.
pub const GLYPH_SNAKE_BODY: &str = "██";

/// Head glyphs oriented by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Head glyph for a stopped snake.
pub const GLYPH_SNAKE_HEAD_STOPPED: &str = "●";

/// Hedge border set: dense foliage on every edge of the play area.
pub const BORDER_HEDGE: border::Set = border::Set {
    top_left: "▓",
    top_right: "▓",
    bottom_left: "▓",
    bottom_right: "▓",
    vertical_left: "▓",
    vertical_right: "▓",
    horizontal_top: "▓",
    horizontal_bottom: "▓",
};
