use thiserror::Error;

/// Errors produced by the crop geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A container, image or bounds has no area to crop from.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// A size or position was negative, NaN or infinite.
    #[error("Malformed input: {0}")]
    MalformedInput(&'static str),

    /// The rounded pixel rectangle does not lie inside the natural image.
    #[error(
        "Crop ({left}, {top}) -> ({right}, {bottom}) does not fit inside the {natural_width}x{natural_height} image"
    )]
    OutOfRangeCrop {
        /// Rounded left edge in pixels.
        left: i64,
        /// Rounded top edge in pixels.
        top: i64,
        /// Rounded right edge in pixels.
        right: i64,
        /// Rounded bottom edge in pixels.
        bottom: i64,
        /// Natural width of the image.
        natural_width: u32,
        /// Natural height of the image.
        natural_height: u32,
    },

    /// A gesture operation was called out of order.
    #[error("Invalid gesture state: {0}")]
    InvalidGestureState(&'static str),
}
