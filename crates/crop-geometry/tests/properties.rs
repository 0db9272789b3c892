use crop_geometry::{
    CropController, Handle, ImageBounds, PixelSize, Point, Rect, SessionConfig, Size,
    compute_image_bounds,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ITERATIONS: usize = 2_000;
const TOLERANCE: f32 = 1e-2;
const HANDLES: [Handle; 5] = [
    Handle::None,
    Handle::NorthWest,
    Handle::NorthEast,
    Handle::SouthWest,
    Handle::SouthEast,
];

fn random_bounds(rng: &mut StdRng) -> ImageBounds {
    let rect = Rect::new(
        rng.random_range(-50.0..200.0),
        rng.random_range(-50.0..200.0),
        rng.random_range(20.0..1200.0),
        rng.random_range(20.0..1200.0),
    );

    ImageBounds::new(rect).unwrap()
}

fn random_config(rng: &mut StdRng) -> SessionConfig {
    SessionConfig {
        force_square: rng.random_bool(0.5),
        min_size: 10.0,
        initial_scale: rng.random_range(0.1..=1.0),
    }
}

fn random_pointer(rng: &mut StdRng, bounds: &ImageBounds) -> Point {
    // Well outside the bounds on every side.
    let margin_x = bounds.width();
    let margin_y = bounds.height();

    Point::new(
        rng.random_range(bounds.left() - margin_x..bounds.right() + margin_x),
        rng.random_range(bounds.top() - margin_y..bounds.bottom() + margin_y),
    )
}

fn assert_valid(rect: Rect, bounds: &ImageBounds, config: &SessionConfig, context: &str) {
    assert!(
        bounds.rect().contains(&rect, TOLERANCE),
        "{context}: {rect:?} escapes {bounds:?}"
    );
    assert!(
        rect.width >= config.min_size - TOLERANCE,
        "{context}: {rect:?} narrower than {}",
        config.min_size
    );
    assert!(
        rect.height >= config.min_size - TOLERANCE,
        "{context}: {rect:?} shorter than {}",
        config.min_size
    );

    if config.force_square {
        assert!(
            (rect.width - rect.height).abs() <= TOLERANCE,
            "{context}: {rect:?} is not square"
        );
    }
}

#[test]
fn gestures_keep_crop_valid() {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);

    for iteration in 0..ITERATIONS {
        let bounds = random_bounds(&mut rng);
        let config = random_config(&mut rng);
        let mut controller = CropController::new(bounds, config).unwrap();
        assert_valid(controller.rect(), &bounds, &config, "initial");

        for _ in 0..4 {
            let handle = HANDLES[rng.random_range(0..HANDLES.len())];
            let start = random_pointer(&mut rng, &bounds);
            controller.begin_gesture(start, handle).unwrap();

            for _ in 0..5 {
                let pointer = random_pointer(&mut rng, &bounds);
                let rect = controller.update_gesture(pointer).unwrap();

                let context = format!("iteration {iteration}, {handle:?} to {pointer:?}");
                assert_valid(rect, &bounds, &config, &context);
            }

            controller.end_gesture().unwrap();
        }
    }
}

#[test]
fn zero_delta_drag_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ITERATIONS {
        let bounds = random_bounds(&mut rng);
        let config = random_config(&mut rng);
        let mut controller = CropController::new(bounds, config).unwrap();
        let before = controller.rect();

        let pointer = random_pointer(&mut rng, &bounds);
        controller.begin_gesture(pointer, Handle::None).unwrap();
        let rect = controller.update_gesture(pointer).unwrap();

        assert!(rect.approx_eq(&before, TOLERANCE), "{before:?} -> {rect:?}");
    }
}

#[test]
fn container_resizes_keep_crop_valid() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ITERATIONS {
        let bounds = random_bounds(&mut rng);
        let config = random_config(&mut rng);
        let mut controller = CropController::new(bounds, config).unwrap();

        let handle = HANDLES[rng.random_range(0..HANDLES.len())];
        controller
            .begin_gesture(random_pointer(&mut rng, &bounds), handle)
            .unwrap();
        controller
            .update_gesture(random_pointer(&mut rng, &bounds))
            .unwrap();
        controller.end_gesture().unwrap();

        let new_bounds = random_bounds(&mut rng);
        controller.on_container_resized(new_bounds).unwrap();

        assert_valid(controller.rect(), &new_bounds, &config, "rescaled");
    }
}

#[test]
fn source_rect_stays_inside_image() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..ITERATIONS {
        let natural = PixelSize::new(rng.random_range(1..8000), rng.random_range(1..8000));
        let container = Size::new(
            rng.random_range(20.0..1200.0),
            rng.random_range(20.0..1200.0),
        );
        let Ok(bounds) = compute_image_bounds(
            container,
            Size::new(natural.width as f32, natural.height as f32),
        ) else {
            continue;
        };

        let config = random_config(&mut rng);
        let Ok(mut controller) = CropController::new(bounds, config) else {
            // Extreme aspect ratios can leave less than the minimum size on one axis.
            continue;
        };

        controller
            .begin_gesture(random_pointer(&mut rng, &bounds), Handle::SouthEast)
            .unwrap();
        controller
            .update_gesture(random_pointer(&mut rng, &bounds))
            .unwrap();
        controller.end_gesture().unwrap();

        let pixel_rect = controller.source_rect(natural).unwrap();

        assert!(pixel_rect.width >= 1 && pixel_rect.height >= 1);
        assert!(pixel_rect.right() <= natural.width, "{pixel_rect:?} {natural:?}");
        assert!(pixel_rect.bottom() <= natural.height, "{pixel_rect:?} {natural:?}");
    }
}
