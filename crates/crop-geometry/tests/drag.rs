use crop_geometry::{GestureSnapshot, ImageBounds, Point, Rect, apply_drag};

fn bounds() -> ImageBounds {
    ImageBounds::new(Rect::new(0.0, 0.0, 300.0, 300.0)).unwrap()
}

fn snapshot() -> GestureSnapshot {
    GestureSnapshot::capture(Point::new(100.0, 100.0), Rect::new(50.0, 50.0, 100.0, 100.0))
}

#[test]
fn zero_delta_is_identity() {
    let snapshot = snapshot();
    let rect = apply_drag(&snapshot, snapshot.pointer, &bounds());

    assert_eq!(rect, snapshot.rect);
}

#[test]
fn translates_by_pointer_delta() {
    let rect = apply_drag(&snapshot(), Point::new(130.0, 80.0), &bounds());

    assert_eq!(rect, Rect::new(80.0, 30.0, 100.0, 100.0));
}

#[test]
fn clamps_to_bounds_and_keeps_size() {
    let rect = apply_drag(&snapshot(), Point::new(-500.0, 900.0), &bounds());
    assert_eq!(rect, Rect::new(0.0, 200.0, 100.0, 100.0));

    let rect = apply_drag(&snapshot(), Point::new(900.0, -500.0), &bounds());
    assert_eq!(rect, Rect::new(200.0, 0.0, 100.0, 100.0));
}

#[test]
fn repeated_calls_are_idempotent() {
    let snapshot = snapshot();
    let pointer = Point::new(260.0, 40.0);

    let first = apply_drag(&snapshot, pointer, &bounds());
    let second = apply_drag(&snapshot, pointer, &bounds());

    assert_eq!(first, second);
}

#[test]
fn respects_offset_bounds() {
    let bounds = ImageBounds::new(Rect::new(0.0, 37.5, 400.0, 225.0)).unwrap();
    let snapshot =
        GestureSnapshot::capture(Point::new(200.0, 150.0), Rect::new(100.0, 50.0, 100.0, 100.0));

    let rect = apply_drag(&snapshot, Point::new(200.0, 0.0), &bounds);

    assert_eq!(rect, Rect::new(100.0, 37.5, 100.0, 100.0));
}
