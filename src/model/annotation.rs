//! Annotation data types.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// Axis-aligned bounding box in pixel units of some reference frame.
///
/// Serialized as the `[x, y, width, height]` array used by detection datasets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Create a bounding box from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Translate the box so that `(origin_x, origin_y)` becomes the new origin.
    pub fn relative_to(&self, origin_x: f64, origin_y: f64) -> Self {
        Self::new(self.x - origin_x, self.y - origin_y, self.width, self.height)
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        [bbox.x, bbox.y, bbox.width, bbox.height]
    }
}

/// A detection annotation as received from the dataset.
///
/// The box is optional: records without one are kept but never plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Box in the original image's pixel space.
    #[serde(default)]
    pub bbox: Option<BBox>,
    /// Category this annotation belongs to.
    pub category_id: CategoryId,
}

impl Annotation {
    /// Create an annotation with a bounding box.
    pub fn new(bbox: BBox, category_id: CategoryId) -> Self {
        Self {
            bbox: Some(bbox),
            category_id,
        }
    }

    /// Create an annotation that carries no bounding box.
    pub fn without_bbox(category_id: CategoryId) -> Self {
        Self {
            bbox: None,
            category_id,
        }
    }

    /// Whether this annotation can be plotted.
    pub fn has_bbox(&self) -> bool {
        self.bbox.is_some()
    }
}
