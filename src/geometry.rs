//! Points, rectangles and the float helpers shared by both games.

/// A position on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the point lies strictly inside the rectangle.
    ///
    /// Points on an edge are outside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }

    /// Returns the centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Euclidean distance between two points.
#[cfg(feature = "std")]
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance between two points.
#[cfg(all(not(feature = "std"), feature = "alloc"))]
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    libm::hypotf(a.x - b.x, a.y - b.y)
}

/// Linear interpolation from `from` towards `to` by `amount`.
#[must_use]
#[expect(
    clippy::suboptimal_flops,
    reason = "mul_add is not available without std"
)]
pub fn lerp(from: f32, to: f32, amount: f32) -> f32 {
    from + (to - from) * amount
}
