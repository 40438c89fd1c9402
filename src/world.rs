use crate::input::Direction;

/// Grid point in world coordinates, centered on the origin.
///
/// All live entity positions are integer multiples of the world step.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Returns this point shifted `distance` units in `direction`.
    ///
    /// World y grows upward, matching the original canvas orientation.
    #[must_use]
    pub fn translated(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

/// Fixed rectangular play field with a uniform grid step.
///
/// Bounds are centered: a point is inside iff both coordinates are strictly
/// between the negative and positive half-extents. The boundary line itself
/// is out of bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct World {
    width: i32,
    height: i32,
    step: i32,
}

impl World {
    /// Creates a world. `width` and `height` must be positive multiples of
    /// `step`, and `step` must be positive and even (the collision threshold
    /// is half a step).
    #[must_use]
    pub fn new(width: i32, height: i32, step: i32) -> Self {
        assert!(step > 0 && step % 2 == 0, "world step must be positive and even");
        assert!(
            width > 0 && height > 0 && width % step == 0 && height % step == 0,
            "world extents must be positive multiples of the step"
        );

        Self {
            width,
            height,
            step,
        }
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn step(self) -> i32 {
        self.step
    }

    /// Returns true when `point` lies strictly inside the bounds.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x > -self.width / 2
            && point.x < self.width / 2
            && point.y > -self.height / 2
            && point.y < self.height / 2
    }

    /// Iterates over every grid-aligned point strictly inside the bounds,
    /// row by row from the bottom-left corner.
    pub fn grid_points(self) -> impl Iterator<Item = Point> {
        let step = self.step;
        let half_w = self.width / 2;
        let half_h = self.height / 2;

        (-half_h / step + 1..half_h / step).flat_map(move |row| {
            (-half_w / step + 1..half_w / step).map(move |col| Point {
                x: col * step,
                y: row * step,
            })
        })
    }
}
