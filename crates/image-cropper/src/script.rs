use std::{fs, io, path::Path};

use crop_geometry::{Point, Size};
use serde::Deserialize;
use thiserror::Error;

use crate::events::{CropperEvent, LayoutEvent, PointerEvent};

/// A recorded sequence of events to replay against a crop session.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released,
    Cancelled,
    ContainerResized { width: f32, height: f32 },
    Crop,
    Reset,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read script file:\n{0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse script:\n{0}")]
    Parse(#[from] toml::de::Error),
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        Ok(toml::from_str(contents)?)
    }

    /// Whether any event asks for a crop to be extracted.
    pub fn crops(&self) -> bool {
        self.events.contains(&ScriptEvent::Crop)
    }

    pub fn cropper_events(&self) -> impl Iterator<Item = CropperEvent> + '_ {
        self.events.iter().copied().map(CropperEvent::from)
    }
}

impl From<ScriptEvent> for CropperEvent {
    fn from(value: ScriptEvent) -> Self {
        match value {
            ScriptEvent::Pressed { x, y } => PointerEvent::Pressed(Point::new(x, y)).into(),
            ScriptEvent::Moved { x, y } => PointerEvent::Moved(Point::new(x, y)).into(),
            ScriptEvent::Released => PointerEvent::Released.into(),
            ScriptEvent::Cancelled => PointerEvent::Cancelled.into(),
            ScriptEvent::ContainerResized { width, height } => {
                LayoutEvent::ContainerResized(Size::new(width, height)).into()
            }
            ScriptEvent::Crop => Self::Crop,
            ScriptEvent::Reset => Self::Reset,
        }
    }
}
