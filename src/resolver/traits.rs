//! Trait definition for image resolver clients.

use std::future::Future;

use super::error::ResolveError;
use super::request::{ImageRequest, ImageResponse};

/// Client for the service that turns an identifier into image bytes.
///
/// Implementations own transport, retries and backend selection. When the
/// request carries a crop window the response describes the cropped image,
/// padded with background wherever the window leaves the source image.
pub trait ImageResolver {
    /// Resolve one image.
    fn resolve(
        &self,
        request: &ImageRequest,
    ) -> impl Future<Output = Result<ImageResponse, ResolveError>>;
}
