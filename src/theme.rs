use ratatui::style::Color;

/// A color theme applied to all visual elements.
///
/// Body segments cycle through `rainbow` by segment index, matching the
/// original rainbow coloring; the remaining fields style the fixed chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Segment palette, cycled head to tail.
    pub rainbow: [Color; 7],
    /// Head glyph color.
    pub snake_head: Color,
    /// Food glyph color (tint behind the sprite glyph).
    pub food: Color,
    /// Background of empty play-area cells.
    pub grass_bg: Color,
    /// Hedge border foreground.
    pub hedge_fg: Color,
    /// Hedge border background.
    pub hedge_bg: Color,
    pub hud_score: Color,
    pub hud_hint: Color,
    pub banner_fg: Color,
}

impl Theme {
    /// Returns the rainbow color for the segment at `index`.
    #[must_use]
    pub fn rainbow_color(&self, index: usize) -> Color {
        self.rainbow[index % self.rainbow.len()]
    }

    /// Looks up a theme by case-insensitive name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        THEMES
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

/// Garden theme: rainbow snake between green hedges, the original look.
pub const THEME_GARDEN: Theme = Theme {
    name: "garden",
    rainbow: [
        Color::Red,
        Color::Rgb(255, 165, 0),
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indexed(54),
        Color::Magenta,
    ],
    snake_head: Color::Black,
    food: Color::Gray,
    grass_bg: Color::Rgb(144, 238, 144),
    hedge_fg: Color::Rgb(34, 139, 34),
    hedge_bg: Color::Rgb(0, 100, 0),
    hud_score: Color::Black,
    hud_hint: Color::DarkGray,
    banner_fg: Color::Red,
};

/// Classic terminal look: single-hue snake on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    rainbow: [
        Color::Green,
        Color::Green,
        Color::Green,
        Color::LightGreen,
        Color::Green,
        Color::Green,
        Color::Green,
    ],
    snake_head: Color::White,
    food: Color::Red,
    grass_bg: Color::Black,
    hedge_fg: Color::White,
    hedge_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_hint: Color::DarkGray,
    banner_fg: Color::Yellow,
};

/// Neon magenta/cyan on black.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    rainbow: [
        Color::Magenta,
        Color::LightMagenta,
        Color::Cyan,
        Color::LightCyan,
        Color::Blue,
        Color::LightBlue,
        Color::Magenta,
    ],
    snake_head: Color::White,
    food: Color::Yellow,
    grass_bg: Color::Black,
    hedge_fg: Color::Magenta,
    hedge_bg: Color::Black,
    hud_score: Color::Magenta,
    hud_hint: Color::DarkGray,
    banner_fg: Color::LightMagenta,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_GARDEN, THEME_CLASSIC, THEME_NEON];
