use serde::{Deserialize, Serialize};

use crate::{
    Error,
    bounds::ImageBounds,
    rect::{Rect, Size},
};

/// Dimensions of the source image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Create a new pixel size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A region of the source image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels, at least one.
    pub width: u32,
    /// Height in pixels, at least one.
    pub height: u32,
}

impl PixelRect {
    /// Builds the closest non-empty pixel rectangle inside an image of `natural` size from
    /// possibly out of range edges.
    ///
    /// `natural` must have a non-zero width and height.
    pub fn clamped(left: i64, top: i64, right: i64, bottom: i64, natural: PixelSize) -> Self {
        let (x, width) = clamp_span(left, right, i64::from(natural.width));
        let (y, height) = clamp_span(top, bottom, i64::from(natural.height));

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Position of the right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Position of the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Maps `rect` from container space to pixels of the natural image.
///
/// The rectangle is first expressed as a fraction of `bounds`, placed on the image at its
/// `displayed` size, then scaled up to the `natural` size. Edges are rounded to the nearest
/// pixel. Fails with [`Error::OutOfRangeCrop`] when the rounded rectangle is empty or leaves
/// the image.
pub fn compute_source_rect(
    rect: &Rect,
    bounds: &ImageBounds,
    displayed: Size,
    natural: PixelSize,
) -> Result<PixelRect, Error> {
    if !displayed.width.is_finite()
        || !displayed.height.is_finite()
        || displayed.width <= 0.0
        || displayed.height <= 0.0
    {
        return Err(Error::MalformedInput(
            "displayed image size must be positive and finite",
        ));
    }

    if natural.width == 0 || natural.height == 0 {
        return Err(Error::DegenerateGeometry("image has no pixels"));
    }

    let (left, right) = map_span(
        rect.left,
        rect.width,
        bounds.left(),
        bounds.width(),
        displayed.width,
        natural.width,
    );
    let (top, bottom) = map_span(
        rect.top,
        rect.height,
        bounds.top(),
        bounds.height(),
        displayed.height,
        natural.height,
    );

    let in_range = left >= 0
        && top >= 0
        && right <= i64::from(natural.width)
        && bottom <= i64::from(natural.height)
        && right > left
        && bottom > top;

    if !in_range {
        return Err(Error::OutOfRangeCrop {
            left,
            top,
            right,
            bottom,
            natural_width: natural.width,
            natural_height: natural.height,
        });
    }

    Ok(PixelRect {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}

/// Maps one axis of the crop to rounded pixel edges.
fn map_span(
    start: f32,
    extent: f32,
    bounds_start: f32,
    bounds_extent: f32,
    displayed: f32,
    natural: u32,
) -> (i64, i64) {
    let start_fraction = (f64::from(start) - f64::from(bounds_start)) / f64::from(bounds_extent);
    let extent_fraction = f64::from(extent) / f64::from(bounds_extent);

    let displayed = f64::from(displayed);
    let scale = f64::from(natural) / displayed;

    let pixel_start = start_fraction * displayed * scale;
    let pixel_end = (start_fraction + extent_fraction) * displayed * scale;

    (pixel_start.round() as i64, pixel_end.round() as i64)
}

/// Clamps `[start, end)` into `[0, limit]` keeping at least one pixel. `limit` must be positive.
fn clamp_span(start: i64, end: i64, limit: i64) -> (u32, u32) {
    let start = start.clamp(0, limit - 1);
    let end = end.clamp(start + 1, limit);

    (start as u32, (end - start) as u32)
}
