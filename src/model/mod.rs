//! Data models for annotated images.

mod annotation;
mod category;
mod dimensions;

pub use annotation::{Annotation, BBox};
pub use category::{Category, CategoryFilter, CategoryFilterOption, CategoryId, CategoryStore};
pub use dimensions::Dimensions;
