//! JSON scene files for previewing a render without a resolver backend.
//!
//! A scene names an image, its annotations and category data, the size the
//! resolver would report and the size the image is displayed at.

use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RendererConfig;
use crate::lifecycle::ImageElement;
use crate::model::{Annotation, Category, CategoryFilterOption, Dimensions};
use crate::renderer::{ImageRenderer, RendererProps, View};
use crate::resolver::FixedResolver;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A self-contained render input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub identifier: String,
    #[serde(default)]
    pub thumbnail: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Active category filter options
    #[serde(default)]
    pub filter: Vec<CategoryFilterOption>,
    /// Full size of the source image
    pub original_dimensions: Dimensions,
    /// On-screen size of the image element
    pub rendered_dimensions: Dimensions,
    /// Base64 payload served for the image
    #[serde(default)]
    pub image_data: String,
    /// Simulate a resolver failure with this message
    #[serde(default)]
    pub resolver_error: Option<String>,
}

struct FixedElement(Dimensions);

impl ImageElement for FixedElement {
    fn rendered_size(&self) -> Dimensions {
        self.0
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        log::info!("Loading scene from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve, lay out and render the scene.
    pub async fn render(&self, config: RendererConfig) -> View {
        let resolver = match &self.resolver_error {
            Some(message) => FixedResolver::failing(message.clone()),
            None => FixedResolver::new(self.original_dimensions)
                .with_image_data(self.image_data.clone()),
        };

        let props = RendererProps::new(self.identifier.clone(), self.annotations.clone())
            .thumbnail(self.thumbnail);
        let renderer = ImageRenderer::new(
            props,
            config,
            Rc::new(self.categories.clone()),
            Rc::new(self.filter.clone()),
        );

        renderer.load(&resolver).await;
        renderer.on_image_load(&FixedElement(self.rendered_dimensions));
        renderer.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r##"{
        "identifier": "/data/street.jpg",
        "annotations": [
            {"bbox": [100, 50, 200, 100], "category_id": 1},
            {"category_id": 2},
            {"bbox": [0, 0, 10, 10], "category_id": 2}
        ],
        "categories": [
            {"id": 1, "name": "person", "color": "#e6194b"},
            {"id": 2, "name": "car", "color": "#3cb44b"}
        ],
        "filter": [{"id": 1, "color": "#e6194b"}],
        "original_dimensions": [1000, 500],
        "rendered_dimensions": [500, 250],
        "image_data": "AAAA"
    }"##;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json(SCENE).unwrap();

        assert_eq!(scene.annotations.len(), 3);
        assert!(!scene.thumbnail);
        assert_eq!(scene.original_dimensions, Dimensions::new(1000.0, 500.0));
    }

    #[test]
    fn test_render_scene() {
        let scene = Scene::from_json(SCENE).unwrap();

        let view = pollster::block_on(scene.render(RendererConfig::default()));

        let View::Image {
            overlay: Some(layer),
            ..
        } = view
        else {
            panic!("Expected image with overlay, got {:?}", view);
        };
        assert_eq!(layer.boxes.len(), 2);
        assert_eq!(layer.boxes[0].x, 50.0);
        assert_eq!(layer.boxes[0].y, 25.0);
        assert!(layer.boxes[1].style.background.is_none());
    }

    #[test]
    fn test_render_scene_failure() {
        let mut scene = Scene::from_json(SCENE).unwrap();
        scene.resolver_error = Some("no such file".to_string());

        let view = pollster::block_on(scene.render(RendererConfig::default()));

        assert_eq!(
            view,
            View::Error {
                message: "Oh no... no such file".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_scene() {
        assert!(matches!(
            Scene::from_json(r#"{"identifier": 3}"#),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn test_missing_scene_file() {
        let path = std::env::temp_dir().join("image-overlay-missing-scene.json");

        assert!(matches!(Scene::load(&path), Err(SceneError::Io(_))));
    }
}
