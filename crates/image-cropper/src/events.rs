use crop_geometry::{Point, Size};

/// Input delivered to a [`CropSession`](crate::session::CropSession).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropperEvent {
    Pointer(PointerEvent),
    Layout(LayoutEvent),
    /// Extract the current crop from the source image.
    Crop,
    /// Restore the initial crop rectangle.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutEvent {
    ContainerResized(Size),
}

mod from_impls {
    pub use super::*;

    impl From<PointerEvent> for CropperEvent {
        fn from(value: PointerEvent) -> Self {
            Self::Pointer(value)
        }
    }

    impl From<LayoutEvent> for CropperEvent {
        fn from(value: LayoutEvent) -> Self {
            Self::Layout(value)
        }
    }
}
