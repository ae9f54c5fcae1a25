//! Padded crop windows around a single annotation.
//!
//! A thumbnail shows one annotation with proportional padding on every side.
//! The window may extend past the image edges (negative offsets, oversized
//! extents); filling that area with background is left to the resolver.

use serde::{Deserialize, Serialize};

use crate::model::{Annotation, BBox, Dimensions};

/// Region of the original image requested from the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropWindow {
    pub left_offset: f64,
    pub top_offset: f64,
    pub crop_width: f64,
    pub crop_height: f64,
}

impl CropWindow {
    /// Size of the cropped image, which becomes the reference space for scaling.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.crop_width, self.crop_height)
    }
}

/// Compute the crop window for `bbox` with `pad_ratio` of its size added on each side.
pub fn compute_crop_window(bbox: &BBox, pad_ratio: f64) -> CropWindow {
    let padding_x = bbox.width * pad_ratio;
    let padding_y = bbox.height * pad_ratio;

    CropWindow {
        left_offset: bbox.x - padding_x,
        top_offset: bbox.y - padding_y,
        crop_width: bbox.width + padding_x * 2.0,
        crop_height: bbox.height + padding_y * 2.0,
    }
}

/// Everything the thumbnail path needs about the single plotted annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailCrop {
    /// Window requested from the resolver
    pub window: CropWindow,
    /// Horizontal padding in reference pixels
    pub padding_x: f64,
    /// Vertical padding in reference pixels
    pub padding_y: f64,
    /// The annotation's box relative to the window origin
    pub local_bbox: BBox,
}

impl ThumbnailCrop {
    pub fn new(bbox: &BBox, pad_ratio: f64) -> Self {
        let window = compute_crop_window(bbox, pad_ratio);
        Self {
            window,
            padding_x: bbox.width * pad_ratio,
            padding_y: bbox.height * pad_ratio,
            local_bbox: bbox.relative_to(window.left_offset, window.top_offset),
        }
    }

    /// Crop for a plot request, if it qualifies.
    ///
    /// Only a thumbnail of exactly one annotation that carries a box is cropped;
    /// every other request renders the full image.
    pub fn for_plot(annotations: &[Annotation], thumbnail: bool, pad_ratio: f64) -> Option<Self> {
        if !thumbnail {
            return None;
        }
        match annotations {
            [single] => single.bbox.as_ref().map(|bbox| Self::new(bbox, pad_ratio)),
            _ => None,
        }
    }
}
