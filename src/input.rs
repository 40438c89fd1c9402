use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions.
///
/// A snake that is not moving has no direction; the "stopped" state is an
/// `Option<Direction>` of `None` on the snake itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit grid delta, y growing upward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// One player intent, consumed at most once per simulation tick.
///
/// `Dodge` is the evasive sidestep: the whole body translates one step and the
/// snake forfeits food pickups until the next `Move` intent arrives.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputIntent {
    Move(Direction),
    Dodge(Direction),
}

/// High-level input events produced by the terminal front end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Intent(InputIntent),
    Quit,
}

/// Polls and maps terminal key events.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    dodge_enabled: bool,
}

impl InputHandler {
    #[must_use]
    pub fn new(dodge_enabled: bool) -> Self {
        Self { dodge_enabled }
    }

    /// Polls for one input event, waiting at most `timeout`.
    ///
    /// Returns `Ok(None)` on timeout and for keys without a binding.
    pub fn poll_input(&self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(self.map_key(key)),
            _ => Ok(None),
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<GameInput> {
        let arrow = |d| Some(GameInput::Intent(InputIntent::Move(d)));
        // WASD dodges when the maneuver is enabled, otherwise doubles as
        // a second set of movement keys.
        let wasd = |d| {
            if self.dodge_enabled {
                Some(GameInput::Intent(InputIntent::Dodge(d)))
            } else {
                Some(GameInput::Intent(InputIntent::Move(d)))
            }
        };

        match key.code {
            KeyCode::Up => arrow(Direction::Up),
            KeyCode::Down => arrow(Direction::Down),
            KeyCode::Left => arrow(Direction::Left),
            KeyCode::Right => arrow(Direction::Right),
            KeyCode::Char('w') | KeyCode::Char('W') => wasd(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => wasd(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => wasd(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => wasd(Direction::Right),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, GameInput, InputHandler, InputIntent};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrows_map_to_move_intents() {
        let handler = InputHandler::new(true);
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);

        assert_eq!(
            handler.map_key(key),
            Some(GameInput::Intent(InputIntent::Move(Direction::Left)))
        );
    }

    #[test]
    fn wasd_maps_to_dodge_only_when_enabled() {
        let key = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);

        let with_dodge = InputHandler::new(true);
        assert_eq!(
            with_dodge.map_key(key),
            Some(GameInput::Intent(InputIntent::Dodge(Direction::Up)))
        );

        let without_dodge = InputHandler::new(false);
        assert_eq!(
            without_dodge.map_key(key),
            Some(GameInput::Intent(InputIntent::Move(Direction::Up)))
        );
    }

    #[test]
    fn quit_keys_map_to_quit() {
        let handler = InputHandler::new(true);

        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(handler.map_key(key), Some(GameInput::Quit));
        }
    }
}
