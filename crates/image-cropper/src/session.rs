use crop_geometry::{
    CropController, Error, Handle, PixelRect, PixelSize, Point, Rect, SessionConfig, Size,
    compute_image_bounds,
};
use tracing::{debug, trace, warn};

use crate::{
    events::{CropperEvent, LayoutEvent, PointerEvent},
    utilities::failure::log_and_panic,
};

/// Connects input events to a [`CropController`] for one image.
pub struct CropSession {
    controller: CropController,
    natural: PixelSize,
    container: Size,
    handle_radius: f32,
}

impl CropSession {
    pub fn new(
        container: Size,
        natural: PixelSize,
        config: SessionConfig,
        handle_radius: f32,
    ) -> Result<Self, Error> {
        let bounds = compute_image_bounds(container, natural_extent(natural))?;
        let controller = CropController::new(bounds, config)?;

        Ok(Self {
            controller,
            natural,
            container,
            handle_radius,
        })
    }

    pub fn controller(&self) -> &CropController {
        &self.controller
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// The pixel rectangle of the image under the current crop.
    pub fn source_rect(&self) -> Result<PixelRect, Error> {
        self.controller.source_rect(self.natural)
    }

    /// Applies an event, returning the pixel rectangle when the event asks for a crop.
    pub fn handle_event(&mut self, event: CropperEvent) -> Result<Option<PixelRect>, Error> {
        let result = match event {
            CropperEvent::Pointer(event) => self.pointer_event(event).map(|_| None),
            CropperEvent::Layout(LayoutEvent::ContainerResized(container)) => {
                self.container_resized(container).map(|_| None)
            }
            CropperEvent::Crop => self.source_rect().map(Some),
            CropperEvent::Reset => self.controller.reset().map(|_| None),
        };

        match result {
            Err(Error::InvalidGestureState(message)) => {
                if cfg!(debug_assertions) {
                    log_and_panic(message, "Invalid gesture state");
                }

                warn!("Ignoring {event:?}: {message}");
                Ok(None)
            }

            result => result,
        }
    }

    fn pointer_event(&mut self, event: PointerEvent) -> Result<(), Error> {
        match event {
            PointerEvent::Pressed(pointer) => {
                let Some(handle) = hit_test(pointer, self.controller.rect(), self.handle_radius)
                else {
                    trace!("Press at {pointer:?} missed the crop");
                    return Ok(());
                };

                self.controller.begin_gesture(pointer, handle).map(|_| ())
            }

            PointerEvent::Moved(pointer) => {
                // Hovering without a press.
                if self.controller.active_handle().is_none() {
                    return Ok(());
                }

                self.controller.update_gesture(pointer).map(|_| ())
            }

            PointerEvent::Released => self.controller.end_gesture(),

            PointerEvent::Cancelled => self.controller.cancel_gesture(),
        }
    }

    fn container_resized(&mut self, container: Size) -> Result<(), Error> {
        let bounds = compute_image_bounds(container, natural_extent(self.natural))?;
        self.container = container;

        debug!("Container resized to {container:?}, image bounds {:?}", bounds.rect());
        self.controller.on_container_resized(bounds)
    }
}

/// The handle under `pointer`: a corner within `radius` of it, the body of the crop for a drag,
/// or nothing outside the crop.
pub fn hit_test(pointer: Point, rect: Rect, radius: f32) -> Option<Handle> {
    let corners = [
        (Handle::NorthWest, Point::new(rect.left, rect.top)),
        (Handle::NorthEast, Point::new(rect.right(), rect.top)),
        (Handle::SouthWest, Point::new(rect.left, rect.bottom())),
        (Handle::SouthEast, Point::new(rect.right(), rect.bottom())),
    ];

    let nearest = corners
        .into_iter()
        .map(|(handle, corner)| (handle, distance(pointer, corner)))
        .filter(|(_, distance)| *distance < radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b));

    if let Some((handle, _)) = nearest {
        return Some(handle);
    }

    let inside = pointer.x >= rect.left
        && pointer.x <= rect.right()
        && pointer.y >= rect.top
        && pointer.y <= rect.bottom();

    inside.then_some(Handle::None)
}

fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

fn natural_extent(natural: PixelSize) -> Size {
    Size::new(natural.width as f32, natural.height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn session(force_square: bool) -> CropSession {
        let config = SessionConfig {
            force_square,
            ..SessionConfig::default()
        };

        // 800x400 image letterboxed to {0, 50, 400, 200}.
        CropSession::new(
            Size::new(400.0, 300.0),
            PixelSize::new(800, 400),
            config,
            20.0,
        )
        .unwrap()
    }

    fn press(x: f32, y: f32) -> CropperEvent {
        PointerEvent::Pressed(Point::new(x, y)).into()
    }

    fn moved(x: f32, y: f32) -> CropperEvent {
        PointerEvent::Moved(Point::new(x, y)).into()
    }

    #[test]
    fn hit_test_prefers_corners() {
        let rect = Rect::new(100.0, 100.0, 100.0, 100.0);

        assert_eq!(hit_test(Point::new(105.0, 95.0), rect, 20.0), Some(Handle::NorthWest));
        assert_eq!(hit_test(Point::new(195.0, 102.0), rect, 20.0), Some(Handle::NorthEast));
        assert_eq!(hit_test(Point::new(90.0, 210.0), rect, 20.0), Some(Handle::SouthWest));
        assert_eq!(hit_test(Point::new(199.0, 199.0), rect, 20.0), Some(Handle::SouthEast));
        assert_eq!(hit_test(Point::new(150.0, 150.0), rect, 20.0), Some(Handle::None));
        assert_eq!(hit_test(Point::new(300.0, 150.0), rect, 20.0), None);
    }

    #[test]
    fn hit_test_picks_nearest_corner_on_small_crop() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert_eq!(hit_test(Point::new(9.0, 8.0), rect, 20.0), Some(Handle::SouthEast));
        assert_eq!(hit_test(Point::new(1.0, 2.0), rect, 20.0), Some(Handle::NorthWest));
    }

    #[test]
    fn drag_then_crop() {
        let mut session = session(true);
        // Square of side 200 centred in {0, 50, 400, 200}.
        assert!(
            session
                .controller()
                .rect()
                .approx_eq(&Rect::new(100.0, 50.0, 200.0, 200.0), TOLERANCE)
        );

        session.handle_event(press(200.0, 150.0)).unwrap();
        session.handle_event(moved(260.0, 150.0)).unwrap();
        session.handle_event(PointerEvent::Released.into()).unwrap();

        assert!(
            session
                .controller()
                .rect()
                .approx_eq(&Rect::new(160.0, 50.0, 200.0, 200.0), TOLERANCE)
        );

        let pixel_rect = session.handle_event(CropperEvent::Crop).unwrap();
        assert_eq!(
            pixel_rect,
            Some(PixelRect {
                x: 320,
                y: 0,
                width: 400,
                height: 400,
            })
        );
    }

    #[test]
    fn corner_press_resizes() {
        let mut session = session(false);
        // Free crop covers {0, 50, 400, 200}.
        session.handle_event(press(395.0, 245.0)).unwrap();
        assert_eq!(session.controller().active_handle(), Some(Handle::SouthEast));

        session.handle_event(moved(200.0, 150.0)).unwrap();
        session.handle_event(PointerEvent::Released.into()).unwrap();

        assert!(
            session
                .controller()
                .rect()
                .approx_eq(&Rect::new(0.0, 50.0, 200.0, 100.0), TOLERANCE)
        );
    }

    #[test]
    fn press_outside_crop_is_ignored() {
        let mut session = session(true);

        session.handle_event(press(20.0, 150.0)).unwrap();
        assert_eq!(session.controller().active_handle(), None);

        session.handle_event(moved(50.0, 150.0)).unwrap();
        assert!(
            session
                .controller()
                .rect()
                .approx_eq(&Rect::new(100.0, 50.0, 200.0, 200.0), TOLERANCE)
        );
    }

    #[test]
    fn cancel_restores_crop() {
        let mut session = session(true);
        let before = session.controller().rect();

        session.handle_event(press(200.0, 150.0)).unwrap();
        session.handle_event(moved(10.0, 10.0)).unwrap();
        session.handle_event(PointerEvent::Cancelled.into()).unwrap();

        assert_eq!(session.controller().rect(), before);
    }

    #[test]
    fn container_resize_rescales_crop() {
        let mut session = session(true);

        session
            .handle_event(LayoutEvent::ContainerResized(Size::new(800.0, 600.0)).into())
            .unwrap();

        assert_eq!(session.container(), Size::new(800.0, 600.0));
        assert!(
            session
                .controller()
                .rect()
                .approx_eq(&Rect::new(200.0, 100.0, 400.0, 400.0), TOLERANCE)
        );
    }

    #[test]
    fn degenerate_container_is_an_error() {
        let mut session = session(true);

        let result =
            session.handle_event(LayoutEvent::ContainerResized(Size::new(0.0, 600.0)).into());

        assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
        assert_eq!(session.container(), Size::new(400.0, 300.0));
    }

    #[test]
    fn reset_restores_initial_crop() {
        let mut session = session(true);
        let initial = session.controller().rect();

        session.handle_event(press(200.0, 150.0)).unwrap();
        session.handle_event(moved(150.0, 150.0)).unwrap();
        session.handle_event(PointerEvent::Released.into()).unwrap();
        assert_ne!(session.controller().rect(), initial);

        session.handle_event(CropperEvent::Reset).unwrap();
        assert_eq!(session.controller().rect(), initial);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid gesture state")]
    fn reset_during_gesture_panics_in_debug() {
        let mut session = session(true);

        session.handle_event(press(200.0, 150.0)).unwrap();
        let _ = session.handle_event(CropperEvent::Reset);
    }
}
