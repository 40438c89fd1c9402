use rainbow_snake::config::RESET_PAUSE_TICKS;
use rainbow_snake::food::Food;
use rainbow_snake::game::{GameState, GameStatus};
use rainbow_snake::input::{Direction, InputIntent};
use rainbow_snake::snake::Snake;
use rainbow_snake::world::{Point, World};

#[test]
fn stepwise_eat_wall_crash_and_restart() {
    let mut state = GameState::new_with_seed(World::new(600, 600, 20), true, 42);
    state.snake = Snake::from_segments(
        vec![
            Point { x: 0, y: 0 },
            Point { x: -20, y: 0 },
            Point { x: -40, y: 0 },
        ],
        Some(Direction::Right),
    );
    state.food = Food::new(Point { x: 20, y: 0 });

    // Tick 1: the head lands on the food.
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Point { x: 20, y: 0 });
    assert_ne!(state.food.position, Point { x: 20, y: 0 });

    // Park the food out of the way and run the snake into the top hedge.
    state.food = Food::new(Point { x: -280, y: -280 });
    state.queue_input(InputIntent::Move(Direction::Up));

    for _ in 0..14 {
        state.tick();
        assert_eq!(state.status, GameStatus::Running);
    }
    assert_eq!(state.snake.head(), Point { x: 20, y: 280 });

    state.tick();
    assert_eq!(state.status, GameStatus::Resetting);

    // The pause holds for the full countdown, then the session restarts.
    for _ in 0..RESET_PAUSE_TICKS - 1 {
        state.tick();
        assert_eq!(state.status, GameStatus::Resetting);
    }
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Point { x: 0, y: 0 });
}

#[test]
fn dodge_through_the_hedge_is_fatal() {
    let mut state = GameState::new_with_seed(World::new(600, 600, 20), true, 7);
    state.snake = Snake::from_segments(
        vec![
            Point { x: 280, y: 0 },
            Point { x: 280, y: -20 },
            Point { x: 280, y: -40 },
        ],
        Some(Direction::Up),
    );
    state.food = Food::new(Point { x: -280, y: -280 });

    state.queue_input(InputIntent::Dodge(Direction::Right));
    state.tick();

    assert_eq!(state.snake.head(), Point { x: 300, y: 20 });
    assert_eq!(state.status, GameStatus::Resetting);
}
