use crate::rect::{Point, Rect};

/// The crop rectangle and pointer position at the start of a gesture.
///
/// Every update during the gesture is measured against the snapshot, so it is never modified
/// until the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    /// Pointer position when the gesture started.
    pub pointer: Point,
    /// Crop rectangle when the gesture started.
    pub rect: Rect,
}

impl GestureSnapshot {
    /// Captures the rectangle and pointer verbatim.
    pub fn capture(pointer: Point, rect: Rect) -> Self {
        Self { pointer, rect }
    }
}
