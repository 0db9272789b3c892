use serde::{Deserialize, Serialize};

use crate::Error;

/// Fixed parameters for a cropping session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Forces the crop rectangle to be square.
    pub force_square: bool,

    /// Smallest width and height the crop rectangle may shrink to.
    pub min_size: f32,

    /// Size of the initial crop rectangle relative to the largest one that fits, in `(0, 1]`.
    pub initial_scale: f32,
}

impl SessionConfig {
    /// Checks the values are usable.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(Error::MalformedInput("min_size must be positive and finite"));
        }

        if !self.initial_scale.is_finite() || self.initial_scale <= 0.0 || self.initial_scale > 1.0
        {
            return Err(Error::MalformedInput("initial_scale must be in (0, 1]"));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            force_square: true,
            min_size: 10.0,
            initial_scale: 1.0,
        }
    }
}
