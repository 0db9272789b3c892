use serde::{Deserialize, Serialize};

/// A position in container space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// If both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width and height in container space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis aligned rectangle described by its top left corner and size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Position of the left edge.
    pub left: f32,
    /// Position of the top edge.
    pub top: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Position of the right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Position of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The top left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The centre of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Moves the rectangle without changing its size.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// If `other` lies inside this rectangle, allowing each edge to overshoot by `tolerance`.
    pub fn contains(&self, other: &Self, tolerance: f32) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// If every component of `other` is within `tolerance` of this rectangle.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.left - other.left).abs() <= tolerance
            && (self.top - other.top).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Clamps `value` to `[min, max]`, preferring `min` when the range is empty.
pub(crate) fn clamp_edge(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max.max(min)
    } else {
        value
    }
}
