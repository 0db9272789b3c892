use crate::{
    Error,
    rect::{Point, Rect, Size, clamp_edge},
};

/// The region of the container covered by the displayed image.
///
/// Differs from the container when the image aspect ratio does not match the
/// container and the image is letterboxed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBounds(Rect);

impl ImageBounds {
    /// Wraps `rect` as image bounds, rejecting empty or malformed rectangles.
    pub fn new(rect: Rect) -> Result<Self, Error> {
        if !rect.left.is_finite() || !rect.top.is_finite() {
            return Err(Error::MalformedInput("image bounds position is not finite"));
        }

        match check_size(rect.size()) {
            SizeCheck::Valid => Ok(Self(rect)),
            SizeCheck::Zero => Err(Error::DegenerateGeometry("image bounds have no area")),
            SizeCheck::Malformed => Err(Error::MalformedInput(
                "image bounds size is negative or not finite",
            )),
        }
    }

    /// The bounds as a rectangle.
    pub fn rect(&self) -> Rect {
        self.0
    }

    /// Position of the left edge.
    pub fn left(&self) -> f32 {
        self.0.left
    }

    /// Position of the top edge.
    pub fn top(&self) -> f32 {
        self.0.top
    }

    /// Position of the right edge.
    pub fn right(&self) -> f32 {
        self.0.right()
    }

    /// Position of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.0.bottom()
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.0.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.0.height
    }

    /// The top left corner.
    pub fn origin(&self) -> Point {
        self.0.origin()
    }

    /// The width and height.
    pub fn size(&self) -> Size {
        self.0.size()
    }

    /// Moves `rect` the shortest distance needed to sit inside the bounds. The size is kept.
    pub fn confine(&self, rect: Rect) -> Rect {
        let left = clamp_edge(rect.left, self.left(), self.right() - rect.width);
        let top = clamp_edge(rect.top, self.top(), self.bottom() - rect.height);

        Rect::new(left, top, rect.width, rect.height)
    }
}

/// Calculates where an image of `natural` size is displayed inside a container of `container`
/// size when scaled to fit.
///
/// The image keeps its aspect ratio, fills one axis of the container completely and is centred
/// on the other axis.
pub fn compute_image_bounds(container: Size, natural: Size) -> Result<ImageBounds, Error> {
    match check_size(container) {
        SizeCheck::Valid => {}
        SizeCheck::Zero => return Err(Error::DegenerateGeometry("container has no area")),
        SizeCheck::Malformed => {
            return Err(Error::MalformedInput(
                "container size is negative or not finite",
            ));
        }
    }

    match check_size(natural) {
        SizeCheck::Valid => {}
        SizeCheck::Zero => return Err(Error::DegenerateGeometry("image has no area")),
        SizeCheck::Malformed => {
            return Err(Error::MalformedInput("image size is negative or not finite"));
        }
    }

    let image_aspect = natural.width / natural.height;
    let container_aspect = container.width / container.height;

    let rect = if image_aspect > container_aspect {
        // Image is relatively wider, bars above and below.
        let height = container.width / image_aspect;
        Rect::new(
            0.0,
            (container.height - height) / 2.0,
            container.width,
            height,
        )
    } else {
        // Image is relatively taller, bars to the left and right.
        let width = container.height * image_aspect;
        Rect::new(
            (container.width - width) / 2.0,
            0.0,
            width,
            container.height,
        )
    };

    ImageBounds::new(rect)
}

enum SizeCheck {
    Valid,
    Zero,
    Malformed,
}

fn check_size(size: Size) -> SizeCheck {
    if !size.width.is_finite()
        || !size.height.is_finite()
        || size.width < 0.0
        || size.height < 0.0
    {
        SizeCheck::Malformed
    } else if size.width == 0.0 || size.height == 0.0 {
        SizeCheck::Zero
    } else {
        SizeCheck::Valid
    }
}
