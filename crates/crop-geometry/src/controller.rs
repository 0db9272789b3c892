use tracing::{debug, trace, warn};

use crate::{
    Error,
    bounds::ImageBounds,
    config::SessionConfig,
    drag::apply_drag,
    gesture::GestureSnapshot,
    handle::Handle,
    rect::{Point, Rect},
    resize::apply_resize,
    source_rect::{PixelRect, PixelSize, compute_source_rect},
};

#[derive(Debug, Clone, Copy)]
struct Gesture {
    snapshot: GestureSnapshot,
    handle: Handle,
}

/// Owns the crop rectangle for one cropping session and applies pointer gestures to it.
#[derive(Debug, Clone)]
pub struct CropController {
    config: SessionConfig,
    bounds: ImageBounds,
    rect: Rect,
    gesture: Option<Gesture>,

    /// Bounds reported while a gesture was active, applied once it ends.
    deferred_bounds: Option<ImageBounds>,
}

impl CropController {
    /// Starts a session over `bounds` with the initial crop rectangle centred in it.
    ///
    /// A square session starts with the largest centred square, otherwise the crop covers the
    /// bounds. Both are scaled by [`SessionConfig::initial_scale`].
    pub fn new(bounds: ImageBounds, config: SessionConfig) -> Result<Self, Error> {
        config.validate()?;
        let rect = initial_rect(&bounds, &config)?;

        debug!("Crop session started with {rect:?} inside {:?}", bounds.rect());

        Ok(Self {
            config,
            bounds,
            rect,
            gesture: None,
            deferred_bounds: None,
        })
    }

    /// The current crop rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The image bounds the rectangle is constrained to.
    pub fn bounds(&self) -> ImageBounds {
        self.bounds
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The handle of the active gesture, if any.
    pub fn active_handle(&self) -> Option<Handle> {
        self.gesture.map(|gesture| gesture.handle)
    }

    /// Restores the initial crop rectangle for the current bounds.
    pub fn reset(&mut self) -> Result<Rect, Error> {
        if self.gesture.is_some() {
            return Err(Error::InvalidGestureState(
                "cannot reset while a gesture is active",
            ));
        }

        self.rect = initial_rect(&self.bounds, &self.config)?;
        debug!("Crop reset to {:?}", self.rect);

        Ok(self.rect)
    }

    /// Snapshots the rectangle and pointer at the start of a gesture on `handle`.
    pub fn begin_gesture(
        &mut self,
        pointer: Point,
        handle: Handle,
    ) -> Result<GestureSnapshot, Error> {
        if self.gesture.is_some() {
            return Err(Error::InvalidGestureState("a gesture is already active"));
        }

        if !pointer.is_finite() {
            return Err(Error::MalformedInput("pointer position is not finite"));
        }

        let snapshot = GestureSnapshot::capture(pointer, self.rect);
        self.gesture = Some(Gesture { snapshot, handle });

        debug!("Gesture started on {handle:?} at {pointer:?}");

        Ok(snapshot)
    }

    /// Moves or resizes the rectangle for the pointer's new position.
    pub fn update_gesture(&mut self, pointer: Point) -> Result<Rect, Error> {
        let Some(gesture) = self.gesture else {
            return Err(Error::InvalidGestureState("no gesture is active"));
        };

        if !pointer.is_finite() {
            return Err(Error::MalformedInput("pointer position is not finite"));
        }

        self.rect = match gesture.handle {
            Handle::None => apply_drag(&gesture.snapshot, pointer, &self.bounds),
            handle => apply_resize(
                &gesture.snapshot,
                pointer,
                &self.bounds,
                &self.config,
                handle,
            ),
        };

        trace!("Gesture moved to {pointer:?}, crop is {:?}", self.rect);

        Ok(self.rect)
    }

    /// Finishes the gesture, keeping the rectangle where it is.
    pub fn end_gesture(&mut self) -> Result<(), Error> {
        if self.gesture.take().is_none() {
            debug!("Ignoring gesture end without an active gesture");
            return Ok(());
        }

        debug!("Gesture ended with {:?}", self.rect);
        self.apply_deferred_bounds()
    }

    /// Aborts the gesture, restoring the rectangle from its snapshot.
    pub fn cancel_gesture(&mut self) -> Result<(), Error> {
        let Some(gesture) = self.gesture.take() else {
            debug!("Ignoring gesture cancel without an active gesture");
            return Ok(());
        };

        self.rect = gesture.snapshot.rect;

        debug!("Gesture cancelled, crop restored to {:?}", self.rect);
        self.apply_deferred_bounds()
    }

    /// Moves the session onto new image bounds after the container changed size.
    ///
    /// The rectangle keeps its position and size relative to the bounds. While a gesture is
    /// active the change waits until the gesture ends or is cancelled.
    pub fn on_container_resized(&mut self, bounds: ImageBounds) -> Result<(), Error> {
        if self.gesture.is_some() {
            warn!("Container resized during a gesture, deferring until the gesture ends");
            self.deferred_bounds = Some(bounds);
            return Ok(());
        }

        self.rebound(bounds)
    }

    /// The pixel rectangle of the natural image covered by the crop.
    ///
    /// A rectangle that rounds outside the image is clamped into it.
    pub fn source_rect(&self, natural: PixelSize) -> Result<PixelRect, Error> {
        match compute_source_rect(&self.rect, &self.bounds, self.bounds.size(), natural) {
            Ok(pixel_rect) => Ok(pixel_rect),

            Err(Error::OutOfRangeCrop {
                left,
                top,
                right,
                bottom,
                natural_width,
                natural_height,
            }) => {
                warn!(
                    "Crop ({left}, {top}) -> ({right}, {bottom}) rounded outside the {natural_width}x{natural_height} image, clamping"
                );

                Ok(PixelRect::clamped(left, top, right, bottom, natural))
            }

            Err(e) => Err(e),
        }
    }

    fn apply_deferred_bounds(&mut self) -> Result<(), Error> {
        match self.deferred_bounds.take() {
            Some(bounds) => self.rebound(bounds),
            None => Ok(()),
        }
    }

    fn rebound(&mut self, bounds: ImageBounds) -> Result<(), Error> {
        let min_size = self.config.min_size;
        if bounds.width() < min_size || bounds.height() < min_size {
            return Err(Error::DegenerateGeometry(
                "image bounds are smaller than the minimum crop size",
            ));
        }

        let old = self.bounds;
        let scale_x = bounds.width() / old.width();
        let scale_y = bounds.height() / old.height();

        let center = self.rect.center();
        let center = Point::new(
            bounds.left() + (center.x - old.left()) * scale_x,
            bounds.top() + (center.y - old.top()) * scale_y,
        );

        let mut width = self.rect.width * scale_x;
        let mut height = self.rect.height * scale_y;

        if self.config.force_square {
            let side = width.min(height);
            width = side;
            height = side;
        }

        let width = width.max(min_size).min(bounds.width());
        let height = height.max(min_size).min(bounds.height());

        let rect = Rect::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        );

        self.rect = bounds.confine(rect);
        self.bounds = bounds;

        debug!("Crop rescaled to {:?} inside {:?}", self.rect, bounds.rect());

        Ok(())
    }
}

fn initial_rect(bounds: &ImageBounds, config: &SessionConfig) -> Result<Rect, Error> {
    if bounds.width() < config.min_size || bounds.height() < config.min_size {
        return Err(Error::DegenerateGeometry(
            "image bounds are smaller than the minimum crop size",
        ));
    }

    let (width, height) = if config.force_square {
        let side = bounds.width().min(bounds.height());
        (side, side)
    } else {
        (bounds.width(), bounds.height())
    };

    let width = (width * config.initial_scale).max(config.min_size);
    let height = (height * config.initial_scale).max(config.min_size);

    Ok(Rect::new(
        bounds.left() + (bounds.width() - width) / 2.0,
        bounds.top() + (bounds.height() - height) / 2.0,
        width,
        height,
    ))
}
