use crate::{
    bounds::ImageBounds,
    config::SessionConfig,
    drag::apply_drag,
    gesture::GestureSnapshot,
    handle::{AspectRule, Corner, Direction, Handle},
    rect::{Point, Rect},
};

/// A resize in progress, the rectangle described by its pinned corner and the extents measured
/// from it in the direction the dragged corner moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeFrame {
    /// The corner being dragged.
    pub corner: Corner,
    /// Position of the pinned corner.
    pub fixed: Point,
    /// Distance from the fixed vertical edge to the moving one.
    pub width: f32,
    /// Distance from the fixed horizontal edge to the moving one.
    pub height: f32,
}

impl ResizeFrame {
    /// The unconstrained frame with the dragged corner placed at `pointer`.
    ///
    /// Extents are negative when the pointer has crossed the fixed edges.
    pub fn from_pointer(corner: Corner, snapshot: &Rect, pointer: Point) -> Self {
        let fixed = corner.fixed_point(snapshot);

        Self {
            corner,
            fixed,
            width: corner.horizontal.sign() * (pointer.x - fixed.x),
            height: corner.vertical.sign() * (pointer.y - fixed.y),
        }
    }

    /// Converts the frame back into a rectangle.
    pub fn to_rect(&self) -> Rect {
        let left = match self.corner.horizontal {
            Direction::Backward => self.fixed.x - self.width,
            Direction::Forward => self.fixed.x,
        };

        let top = match self.corner.vertical {
            Direction::Backward => self.fixed.y - self.height,
            Direction::Forward => self.fixed.y,
        };

        Rect::new(left, top, self.width, self.height)
    }

    /// Largest width and height the frame can take before the moving edges leave `bounds`.
    pub fn room(&self, bounds: &ImageBounds) -> (f32, f32) {
        let width = match self.corner.horizontal {
            Direction::Backward => self.fixed.x - bounds.left(),
            Direction::Forward => bounds.right() - self.fixed.x,
        };

        let height = match self.corner.vertical {
            Direction::Backward => self.fixed.y - bounds.top(),
            Direction::Forward => bounds.bottom() - self.fixed.y,
        };

        (width, height)
    }
}

/// Raises extents below `min_size` to it, freezing the moving edge `min_size` away from the
/// fixed edge instead of letting the rectangle invert.
pub fn enforce_min_size(frame: ResizeFrame, min_size: f32) -> ResizeFrame {
    let mut frame = frame;

    if frame.width < min_size {
        frame.width = min_size;
    }

    if frame.height < min_size {
        frame.height = min_size;
    }

    frame
}

/// Stops the moving edges at `bounds`, measuring the extent from the fixed edge to the bound.
pub fn clamp_to_bounds(frame: ResizeFrame, bounds: &ImageBounds) -> ResizeFrame {
    let mut frame = frame;
    let (room_width, room_height) = frame.room(bounds);

    if frame.width > room_width {
        frame.width = room_width;
    }

    if frame.height > room_height {
        frame.height = room_height;
    }

    frame
}

/// Makes the frame square while keeping the fixed corner pinned.
///
/// Expects a frame that already went through [`enforce_min_size`] and [`clamp_to_bounds`].
pub fn lock_aspect(frame: ResizeFrame, bounds: &ImageBounds) -> ResizeFrame {
    let mut frame = frame;

    let side = match frame.corner.aspect {
        AspectRule::Shrink => frame.width.min(frame.height),

        AspectRule::Grow => {
            let (room_width, room_height) = frame.room(bounds);
            let mut side = frame.width.max(frame.height);

            if side > room_width {
                side = room_width;
            }

            if side > room_height {
                side = room_height;
            }

            side
        }
    };

    frame.width = side;
    frame.height = side;

    frame
}

/// Resizes the snapshot rectangle by dragging the corner named by `handle` to `pointer`.
///
/// Constraints are applied as minimum size, then bounds, then the square lock. [`Handle::None`]
/// moves the rectangle instead.
pub fn apply_resize(
    snapshot: &GestureSnapshot,
    pointer: Point,
    bounds: &ImageBounds,
    config: &SessionConfig,
    handle: Handle,
) -> Rect {
    let Some(corner) = handle.corner() else {
        return apply_drag(snapshot, pointer, bounds);
    };

    let frame = ResizeFrame::from_pointer(corner, &snapshot.rect, pointer);
    let frame = enforce_min_size(frame, config.min_size);
    let frame = clamp_to_bounds(frame, bounds);

    let frame = if config.force_square {
        lock_aspect(frame, bounds)
    } else {
        frame
    };

    frame.to_rect()
}
