//! Mapping boxes from a reference pixel space into the rendered image.

use crate::model::{Annotation, BBox, Dimensions};

/// A box mapped into rendered space, with the factors that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledAnnotation<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// The annotation this box was derived from
    pub annotation: &'a Annotation,
    /// Rendered width per reference pixel
    pub scale_x: f64,
    /// Rendered height per reference pixel
    pub scale_y: f64,
}

impl ScaledAnnotation<'_> {
    /// Map the scaled box back into reference space.
    pub fn unscale(&self) -> BBox {
        BBox::new(
            self.x / self.scale_x,
            self.y / self.scale_y,
            self.width / self.scale_x,
            self.height / self.scale_y,
        )
    }
}

/// Scale `bbox` (expressed in `reference` space) to the `rendered` image size.
///
/// x and width use the horizontal factor, y and height the vertical one, so
/// non-uniform resizes are handled.
///
/// `reference` must have non-zero components. Callers gate on both sizes being
/// known before scaling; a zero reference is a caller bug, not an input this
/// function recovers from.
pub fn scale_to_fitted_image<'a>(
    reference: Dimensions,
    rendered: Dimensions,
    annotation: &'a Annotation,
    bbox: &BBox,
) -> ScaledAnnotation<'a> {
    debug_assert!(
        reference.is_usable(),
        "reference dimensions must be non-zero: {:?}",
        reference
    );

    let scale_x = rendered.width / reference.width;
    let scale_y = rendered.height / reference.height;

    ScaledAnnotation {
        x: bbox.x * scale_x,
        y: bbox.y * scale_y,
        width: bbox.width * scale_x,
        height: bbox.height * scale_y,
        annotation,
        scale_x,
        scale_y,
    }
}
