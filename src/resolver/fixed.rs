//! In-memory resolver answering every request with one configured image.

use std::cell::RefCell;

use super::error::ResolveError;
use super::request::{ImageRequest, ImageResponse};
use super::traits::ImageResolver;
use crate::model::Dimensions;

/// Resolver that serves a fixed image without any I/O.
///
/// Cropped requests are answered with the crop size, the way the real
/// backend reports the size of the padded crop it produced. Used by the
/// preview binary and by tests.
#[derive(Debug)]
pub struct FixedResolver {
    image_data: String,
    original: Dimensions,
    failure: Option<String>,
    requests: RefCell<Vec<ImageRequest>>,
}

impl FixedResolver {
    /// Serve an image of the given original size with empty pixel data.
    pub fn new(original: Dimensions) -> Self {
        Self {
            image_data: String::new(),
            original,
            failure: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Set the base64 payload returned with every response.
    pub fn with_image_data(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = image_data.into();
        self
    }

    /// Make every request fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(Dimensions::new(0.0, 0.0))
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.borrow().clone()
    }
}

impl ImageResolver for FixedResolver {
    async fn resolve(&self, request: &ImageRequest) -> Result<ImageResponse, ResolveError> {
        self.requests.borrow_mut().push(request.clone());

        if let Some(message) = &self.failure {
            return Err(ResolveError::transport(message.clone()));
        }

        let size = request
            .crop()
            .map(|window| window.dimensions())
            .unwrap_or(self.original);

        log::debug!(
            "Resolved '{}' via {} as {}x{}",
            request.identifier,
            request.resolver_name.name(),
            size.width,
            size.height
        );

        Ok(ImageResponse {
            image_data: self.image_data.clone(),
            original_width: size.width,
            original_height: size.height,
        })
    }
}
