use crate::{
    bounds::ImageBounds,
    gesture::GestureSnapshot,
    rect::{Point, Rect},
};

/// Moves the snapshot rectangle by the pointer's travel since the gesture started, keeping it
/// inside `bounds`. The size never changes.
pub fn apply_drag(snapshot: &GestureSnapshot, pointer: Point, bounds: &ImageBounds) -> Rect {
    let dx = pointer.x - snapshot.pointer.x;
    let dy = pointer.y - snapshot.pointer.y;

    bounds.confine(snapshot.rect.translated(dx, dy))
}
