use crate::config::INITIAL_SNAKE_LENGTH;
use crate::input::Direction;
use crate::world::{Point, World};

/// Mutable snake state: an ordered segment chain and a facing direction.
///
/// Segments are stored head-first. Immediately after [`Snake::advance`] every
/// segment is exactly one grid step from its predecessor; [`Snake::dodge`]
/// preserves that spacing because it translates the whole chain rigidly.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Point>,
    facing: Option<Direction>,
}

impl Snake {
    /// Builds the initial chain: head at the origin, body extending left,
    /// moving right.
    #[must_use]
    pub fn new(world: World) -> Self {
        let step = world.step();
        let segments = (0..INITIAL_SNAKE_LENGTH)
            .map(|i| Point {
                x: -(i as i32) * step,
                y: 0,
            })
            .collect();

        Self {
            segments,
            facing: Some(Direction::Right),
        }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Point>, facing: Option<Direction>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self { segments, facing }
    }

    /// Applies one movement step: each trailing segment takes its
    /// predecessor's prior position, then the head advances one grid step in
    /// the facing direction. No-op while stopped.
    pub fn advance(&mut self, world: World) {
        let Some(facing) = self.facing else {
            return;
        };

        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].translated(facing, world.step());
    }

    /// Appends a new tail segment on top of the current tail, so the chain
    /// lengthens without any segment visibly jumping.
    pub fn grow(&mut self) {
        let tail = *self
            .segments
            .last()
            .expect("snake body always has at least one segment");
        self.segments.push(tail);
    }

    /// Changes the facing direction with the original reversal rule: while
    /// moving, the exact reverse stops the snake; while stopped, any
    /// direction starts it. A moving snake therefore never turns 180° in one
    /// input, but two presses of the reverse key do reverse it.
    pub fn change_direction(&mut self, direction: Direction) {
        match self.facing {
            Some(current) if direction == current.opposite() => self.facing = None,
            _ => self.facing = Some(direction),
        }
    }

    /// Translates every segment one grid step in `direction`, bypassing
    /// chain-following movement.
    pub fn dodge(&mut self, direction: Direction, world: World) {
        let step = world.step();
        for segment in &mut self.segments {
            *segment = segment.translated(direction, step);
        }
    }

    /// Returns true when the head has left the world or sits within half a
    /// grid step of any non-head segment.
    #[must_use]
    pub fn head_collision(&self, world: World) -> bool {
        let head = self.head();
        if !world.contains(head) {
            return true;
        }

        let step = i64::from(world.step());
        self.segments
            .iter()
            .skip(1)
            .any(|segment| 4 * head.distance_squared(*segment) < step * step)
    }

    /// Discards all segments and rebuilds the initial chain.
    pub fn reset(&mut self, world: World) {
        *self = Self::new(world);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Point {
        self.segments[0]
    }

    /// Returns true if any segment occupies `point`.
    #[must_use]
    pub fn occupies(&self, point: Point) -> bool {
        self.segments.contains(&point)
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the facing direction, `None` while stopped.
    #[must_use]
    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }
}
