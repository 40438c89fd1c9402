use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RESET_PAUSE_TICKS;
use crate::food::Food;
use crate::input::InputIntent;
use crate::snake::Snake;
use crate::world::World;

/// Current phase of the session loop.
///
/// The loop never terminates on its own: a crash leads to `Resetting`, a
/// short pause, and a fresh snake. Only the front end quits.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Resetting,
}

/// Kind of the most recently consumed intent.
///
/// Persists across input-less ticks: after a dodge the snake cannot eat
/// until the player issues a normal move again.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum LastAction {
    Move,
    Dodge,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    reset_ticks_left: u8,
    pending: Option<InputIntent>,
    last_action: LastAction,
    dodge_enabled: bool,
    world: World,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from entropy.
    #[must_use]
    pub fn new(world: World, dodge_enabled: bool) -> Self {
        Self::with_rng(world, dodge_enabled, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(world: World, dodge_enabled: bool, seed: u64) -> Self {
        Self::with_rng(world, dodge_enabled, StdRng::seed_from_u64(seed))
    }

    fn with_rng(world: World, dodge_enabled: bool, mut rng: StdRng) -> Self {
        let snake = Snake::new(world);
        let food = Food::spawn(&mut rng, world, &snake);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            reset_ticks_left: 0,
            pending: None,
            last_action: LastAction::Move,
            dodge_enabled,
            world,
            rng,
        }
    }

    /// Queues one intent for the next tick, last-input-wins.
    ///
    /// Dodge intents are dropped when the maneuver is disabled.
    pub fn queue_input(&mut self, intent: InputIntent) {
        if matches!(intent, InputIntent::Dodge(_)) && !self.dodge_enabled {
            return;
        }
        self.pending = Some(intent);
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        if self.status == GameStatus::Resetting {
            self.reset_ticks_left = self.reset_ticks_left.saturating_sub(1);
            if self.reset_ticks_left == 0 {
                self.restart();
            }
            return;
        }

        self.tick_count += 1;

        if let Some(intent) = self.pending.take() {
            match intent {
                InputIntent::Move(direction) => {
                    self.snake.change_direction(direction);
                    self.last_action = LastAction::Move;
                }
                InputIntent::Dodge(direction) => {
                    self.snake.dodge(direction, self.world);
                    self.last_action = LastAction::Dodge;
                }
            }
        }

        self.snake.advance(self.world);

        // Eating is forfeit while the last action was a dodge; sidestepping
        // onto food does not count.
        if self.last_action == LastAction::Move && self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow();
            self.food.refresh(&mut self.rng, self.world, &self.snake);
        }

        if self.snake.head_collision(self.world) {
            self.status = GameStatus::Resetting;
            self.reset_ticks_left = RESET_PAUSE_TICKS;
        }
    }

    fn restart(&mut self) {
        self.snake.reset(self.world);
        self.score = 0;
        self.pending = None;
        self.last_action = LastAction::Move;
        self.status = GameStatus::Running;
    }

    /// Returns the play field.
    #[must_use]
    pub fn world(&self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RESET_PAUSE_TICKS;
    use crate::food::Food;
    use crate::input::{Direction, InputIntent};
    use crate::snake::Snake;
    use crate::world::{Point, World};

    use super::{GameState, GameStatus};

    fn small_state(seed: u64) -> GameState {
        GameState::new_with_seed(World::new(200, 200, 20), true, seed)
    }

    #[test]
    fn eating_grows_scores_and_relocates_food() {
        let mut state = small_state(1);
        state.snake = Snake::from_segments(vec![Point { x: 0, y: 0 }], Some(Direction::Right));
        state.food = Food::new(Point { x: 20, y: 0 });

        state.tick();

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_ne!(state.food.position, Point { x: 20, y: 0 });
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn dodge_tick_does_not_eat() {
        let mut state = small_state(2);
        state.snake = Snake::from_segments(vec![Point { x: 0, y: 0 }], Some(Direction::Right));
        state.food = Food::new(Point { x: 20, y: 20 });

        // Dodge up, then the normal advance lands the head exactly on food.
        state.queue_input(InputIntent::Dodge(Direction::Up));
        state.tick();

        assert_eq!(state.snake.head(), Point { x: 20, y: 20 });
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.food.position, Point { x: 20, y: 20 });
    }

    #[test]
    fn dodge_forfeit_persists_until_a_move_input() {
        let mut state = small_state(3);
        state.snake = Snake::from_segments(vec![Point { x: -40, y: 0 }], Some(Direction::Right));
        state.food = Food::new(Point { x: 0, y: 20 });

        state.queue_input(InputIntent::Dodge(Direction::Up));
        state.tick();
        // No further input: the forfeit still holds on the next tick.
        state.tick();

        assert_eq!(state.snake.head(), Point { x: 0, y: 20 });
        assert_eq!(state.score, 0);

        // A move input lifts the forfeit; re-approach the food from the left.
        state.food = Food::new(Point { x: 40, y: 20 });
        state.queue_input(InputIntent::Move(Direction::Right));
        state.tick();
        state.tick();

        assert_eq!(state.score, 1);
    }

    #[test]
    fn dodge_intent_is_dropped_when_disabled() {
        let mut state = GameState::new_with_seed(World::new(200, 200, 20), false, 4);
        state.snake = Snake::from_segments(vec![Point { x: 0, y: 0 }], Some(Direction::Right));

        state.queue_input(InputIntent::Dodge(Direction::Up));
        state.tick();

        assert_eq!(state.snake.head(), Point { x: 20, y: 0 });
    }

    #[test]
    fn wall_crash_pauses_then_restarts_fresh() {
        let mut state = small_state(5);
        state.snake = Snake::from_segments(vec![Point { x: 80, y: 0 }], Some(Direction::Right));
        state.score = 9;

        state.tick();
        assert_eq!(state.status, GameStatus::Resetting);

        // Ticks during the pause leave the crashed snake in place.
        for _ in 0..RESET_PAUSE_TICKS - 1 {
            state.tick();
            assert_eq!(state.status, GameStatus::Resetting);
        }

        state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Point { x: 0, y: 0 });
        assert_eq!(state.snake.facing(), Some(Direction::Right));
    }

    #[test]
    fn self_crash_sets_resetting() {
        let mut state = small_state(6);
        state.snake = Snake::from_segments(
            vec![
                Point { x: 0, y: 0 },
                Point { x: -20, y: 0 },
                Point { x: -20, y: 20 },
                Point { x: 0, y: 20 },
                Point { x: 20, y: 20 },
                Point { x: 20, y: 0 },
            ],
            Some(Direction::Right),
        );
        // Keep food out of the path.
        state.food = Food::new(Point { x: -80, y: -80 });

        state.queue_input(InputIntent::Move(Direction::Up));
        state.tick();

        assert_eq!(state.status, GameStatus::Resetting);
    }

    #[test]
    fn reverse_input_stops_the_snake_in_place() {
        let mut state = small_state(7);
        state.snake = Snake::from_segments(vec![Point { x: 0, y: 0 }], Some(Direction::Right));
        state.food = Food::new(Point { x: -80, y: -80 });

        state.queue_input(InputIntent::Move(Direction::Left));
        state.tick();
        state.tick();

        assert_eq!(state.snake.head(), Point { x: 0, y: 0 });
        assert_eq!(state.snake.facing(), None);
    }

    #[test]
    fn last_queued_intent_wins_within_a_tick() {
        let mut state = small_state(8);
        state.snake = Snake::from_segments(vec![Point { x: 0, y: 0 }], Some(Direction::Right));
        state.food = Food::new(Point { x: -80, y: -80 });

        state.queue_input(InputIntent::Move(Direction::Up));
        state.queue_input(InputIntent::Move(Direction::Down));
        state.tick();

        assert_eq!(state.snake.head(), Point { x: 0, y: -20 });
    }
}
