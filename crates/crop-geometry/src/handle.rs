use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

/// What part of the crop rectangle a gesture grabbed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    /// The body of the rectangle, the gesture moves it.
    #[default]
    #[serde(rename = "none")]
    None,

    /// Top left corner.
    #[serde(rename = "nw")]
    NorthWest,

    /// Top right corner.
    #[serde(rename = "ne")]
    NorthEast,

    /// Bottom left corner.
    #[serde(rename = "sw")]
    SouthWest,

    /// Bottom right corner.
    #[serde(rename = "se")]
    SouthEast,
}

impl Handle {
    /// The four corner handles.
    pub const CORNERS: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The resize descriptor for a corner handle, `None` for [`Handle::None`].
    pub fn corner(self) -> Option<Corner> {
        use Direction::{Backward, Forward};

        let (horizontal, vertical, aspect) = match self {
            Self::None => return None,
            Self::NorthWest => (Backward, Backward, AspectRule::Shrink),
            Self::NorthEast => (Forward, Backward, AspectRule::Shrink),
            Self::SouthWest => (Backward, Forward, AspectRule::Shrink),
            Self::SouthEast => (Forward, Forward, AspectRule::Grow),
        };

        Some(Corner {
            horizontal,
            vertical,
            aspect,
        })
    }
}

/// Which way the moving edge of a corner lies from the fixed edge along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The moving edge is the left or top edge.
    Backward,
    /// The moving edge is the right or bottom edge.
    Forward,
}

impl Direction {
    /// `-1` for backward, `1` for forward.
    pub fn sign(self) -> f32 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }

    /// The fixed edge on this axis given the `start` and `end` edges of the rectangle.
    fn fixed_edge(self, start: f32, end: f32) -> f32 {
        match self {
            Self::Backward => end,
            Self::Forward => start,
        }
    }
}

/// How a square crop picks its side length from the constrained width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRule {
    /// Use the smaller extent.
    Shrink,
    /// Use the larger extent, capped by the room left to the bounds.
    Grow,
}

/// Describes how dragging a corner reshapes the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Direction of the moving vertical edge.
    pub horizontal: Direction,
    /// Direction of the moving horizontal edge.
    pub vertical: Direction,
    /// Side selection when the crop is square.
    pub aspect: AspectRule,
}

impl Corner {
    /// The corner of `rect` that stays pinned while this corner is dragged.
    pub fn fixed_point(&self, rect: &Rect) -> Point {
        Point::new(
            self.horizontal.fixed_edge(rect.left, rect.right()),
            self.vertical.fixed_edge(rect.top, rect.bottom()),
        )
    }
}
