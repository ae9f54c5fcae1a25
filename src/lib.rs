//! Image Overlay - annotated image rendering core
//!
//! Positions object-detection bounding boxes over an image that is displayed
//! at an arbitrary size, and builds padded thumbnail crops around a single
//! annotation.
//!
//! Pixel fetching is delegated to an [`resolver::ImageResolver`]; category
//! metadata comes from injected [`model::CategoryStore`] and
//! [`model::CategoryFilter`] lookups.

pub mod color_utils;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod lifecycle;
pub mod model;
pub mod overlay;
pub mod renderer;
pub mod resolver;
pub mod scene;

pub use config::RendererConfig;
pub use renderer::{ImageRenderer, RendererProps, View};
