use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Theme;

/// Supplemental values the HUD needs beyond game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    pub dodge_enabled: bool,
}

/// Renders the score line above the board and the controls hint below it,
/// returning the remaining play area in between.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [score_area, play_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(info.theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    let hint = if info.dodge_enabled {
        "Arrows move · WASD dodge · Q quits"
    } else {
        "Arrows/WASD move · Q quits"
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Center)
            .style(Style::new().fg(info.theme.hud_hint)),
        hint_area,
    );

    play_area
}
