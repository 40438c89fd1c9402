use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::config::{
    BORDER_HEDGE, CELL_COLUMNS, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_STOPPED, GLYPH_SNAKE_HEAD_UP,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::theme::Theme;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_crash_banner;
use crate::world::{Point, World};

/// One cell to paint: a grid point plus glyph and colors.
///
/// The game itself never holds drawing handles; the renderer rebuilds these
/// records from state every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSprite {
    pub point: Point,
    pub glyph: &'static str,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

/// Renders the full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let theme = info.theme;
    let play_area = render_hud(frame, frame.area(), state, info);
    let Some(board) = board_rect(play_area, state.world()) else {
        return;
    };

    let hedge = Block::bordered()
        .border_set(BORDER_HEDGE)
        .border_style(Style::new().fg(theme.hedge_fg).bg(theme.hedge_bg));
    let inner = hedge.inner(board);
    frame.render_widget(hedge, board);

    // Grass backdrop for empty cells.
    frame.render_widget(Block::new().style(Style::new().bg(theme.grass_bg)), inner);

    let buffer = frame.buffer_mut();
    for sprite in sprites(state, theme) {
        let Some((x, y)) = world_to_terminal(inner, state.world(), sprite.point) else {
            continue;
        };

        let mut style = Style::new().fg(sprite.fg).bg(sprite.bg);
        if sprite.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        buffer.set_string(x, y, pad_to_cell(sprite.glyph), style);
    }

    if state.status == GameStatus::Resetting {
        render_crash_banner(frame, board, theme);
    }
}

/// Builds the per-entity draw records: food first, then tail-to-head
/// segments so the head paints over any overlap.
#[must_use]
pub fn sprites(state: &GameState, theme: &Theme) -> Vec<CellSprite> {
    let mut records = vec![CellSprite {
        point: state.food.position,
        glyph: GLYPH_FOOD,
        fg: theme.food,
        bg: theme.grass_bg,
        bold: false,
    }];

    let segments: Vec<Point> = state.snake.segments().copied().collect();
    for (index, point) in segments.iter().enumerate().rev() {
        if index == 0 {
            records.push(CellSprite {
                point: *point,
                glyph: head_glyph(state.snake.facing()),
                fg: theme.snake_head,
                bg: theme.rainbow_color(0),
                bold: true,
            });
        } else {
            records.push(CellSprite {
                point: *point,
                glyph: GLYPH_SNAKE_BODY,
                fg: theme.rainbow_color(index),
                bg: theme.grass_bg,
                bold: false,
            });
        }
    }

    records
}

fn head_glyph(facing: Option<Direction>) -> &'static str {
    match facing {
        Some(Direction::Up) => GLYPH_SNAKE_HEAD_UP,
        Some(Direction::Down) => GLYPH_SNAKE_HEAD_DOWN,
        Some(Direction::Left) => GLYPH_SNAKE_HEAD_LEFT,
        Some(Direction::Right) => GLYPH_SNAKE_HEAD_RIGHT,
        None => GLYPH_SNAKE_HEAD_STOPPED,
    }
}

/// Centers the bordered board inside `area`; `None` when the terminal is too
/// small to fit it.
fn board_rect(area: Rect, world: World) -> Option<Rect> {
    let columns = u16::try_from(world.width() / world.step() - 1).ok()?;
    let rows = u16::try_from(world.height() / world.step() - 1).ok()?;

    let width = columns.checked_mul(CELL_COLUMNS)?.checked_add(2)?;
    let height = rows.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

/// Maps a world point to the terminal column/row of its cell inside `inner`.
///
/// Out-of-bounds points map to `None` and are simply not drawn, so nothing
/// is ever painted outside the hedge.
fn world_to_terminal(inner: Rect, world: World, point: Point) -> Option<(u16, u16)> {
    if !world.contains(point) {
        return None;
    }

    let step = world.step();
    let col = u16::try_from((point.x + world.width() / 2) / step - 1).ok()?;
    let row = u16::try_from((world.height() / 2 - point.y) / step - 1).ok()?;

    let x = inner.x.saturating_add(col.checked_mul(CELL_COLUMNS)?);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

/// Pads a glyph with trailing spaces to fill one cell's worth of columns.
fn pad_to_cell(glyph: &str) -> String {
    let pad = usize::from(CELL_COLUMNS).saturating_sub(glyph.width());
    format!("{glyph}{}", " ".repeat(pad))
}
