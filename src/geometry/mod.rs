//! Coordinate transforms between the original image, a thumbnail crop and
//! the rendered image.

mod crop;
mod scale;

pub use crop::{CropWindow, ThumbnailCrop, compute_crop_window};
pub use scale::{ScaledAnnotation, scale_to_fitted_image};
