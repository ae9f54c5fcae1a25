//! Width/height pairs for images in some pixel space.

use serde::{Deserialize, Serialize};

/// Size of an image, serialized as `[width, height]`.
///
/// An unknown size is expressed as `Option<Dimensions>::None` rather than a
/// zero-sized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both components can be used as a scaling denominator.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<[f64; 2]> for Dimensions {
    fn from([width, height]: [f64; 2]) -> Self {
        Self::new(width, height)
    }
}

impl From<Dimensions> for [f64; 2] {
    fn from(dims: Dimensions) -> Self {
        [dims.width, dims.height]
    }
}
