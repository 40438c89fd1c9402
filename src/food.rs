use rand::Rng;

use crate::snake::Snake;
use crate::world::{Point, World};

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    /// Spawns food in a free cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, world: World, snake: &Snake) -> Self {
        Self::new(spawn_position(rng, world, snake))
    }

    /// Relocates this food to a new free cell.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R, world: World, snake: &Snake) {
        self.position = spawn_position(rng, world, snake);
    }
}

/// Picks a uniformly random grid-aligned position strictly inside the world
/// that the snake does not occupy.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, world: World, snake: &Snake) -> Point {
    let candidates: Vec<Point> = world
        .grid_points()
        .filter(|point| !snake.occupies(*point))
        .collect();

    assert!(
        !candidates.is_empty(),
        "spawn_position: no free cells in a {}×{} world",
        world.width(),
        world.height(),
    );

    candidates[rng.gen_range(0..candidates.len())]
}
