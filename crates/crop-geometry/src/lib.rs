//! # Crop Geometry
//! Geometry for an interactive crop region laid over a letterboxed image.
//!
//! All coordinates are container-relative pixels unless stated otherwise. The
//! [`CropController`] owns the crop rectangle for a session, the free functions
//! compute each update without touching any state.
//!

pub use bounds::{ImageBounds, compute_image_bounds};
pub use config::SessionConfig;
pub use controller::CropController;
pub use drag::apply_drag;
pub use error::Error;
pub use gesture::GestureSnapshot;
pub use handle::{AspectRule, Corner, Direction, Handle};
pub use rect::{Point, Rect, Size};
pub use resize::{ResizeFrame, apply_resize, clamp_to_bounds, enforce_min_size, lock_aspect};
pub use source_rect::{PixelRect, PixelSize, compute_source_rect};

mod bounds;
mod config;
mod controller;
mod drag;
mod error;
mod gesture;
mod handle;
mod rect;
mod resize;
mod source_rect;
