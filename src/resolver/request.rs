//! Wire types exchanged with the image resolver service.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use super::classifier::ResolverName;
use super::error::ResolveError;
use crate::geometry::CropWindow;
use crate::model::Dimensions;

/// GraphQL document sent by resolver clients backed by the query API.
pub const IMAGE_QUERY: &str = r#"
  query getimage($identifier: String!, $thumbnail: Boolean!, $resolverName: String!, $topOffset: Float, $leftOffset: Float, $cropWidth: Float, $cropHeight: Float) {
    imageResolver(identifier: $identifier, thumbnail: $thumbnail, resolverName: $resolverName, topOffset: $topOffset, leftOffset: $leftOffset, cropWidth: $cropWidth, cropHeight: $cropHeight) {
      imageData
      originalWidth
      originalHeight
    }
  }
"#;

/// Variables of a resolver request.
///
/// The crop fields are present only for a single-annotation thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub identifier: String,
    pub thumbnail: bool,
    pub resolver_name: ResolverName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_height: Option<f64>,
}

impl ImageRequest {
    /// Request the full image; the resolver name is derived from the identifier.
    pub fn new(identifier: impl Into<String>, thumbnail: bool) -> Self {
        let identifier = identifier.into();
        Self {
            resolver_name: ResolverName::classify(&identifier),
            identifier,
            thumbnail,
            top_offset: None,
            left_offset: None,
            crop_width: None,
            crop_height: None,
        }
    }

    /// Restrict the request to a crop window.
    pub fn with_crop(mut self, window: &CropWindow) -> Self {
        self.top_offset = Some(window.top_offset);
        self.left_offset = Some(window.left_offset);
        self.crop_width = Some(window.crop_width);
        self.crop_height = Some(window.crop_height);
        self
    }

    /// The requested crop window, if all four crop fields are set.
    pub fn crop(&self) -> Option<CropWindow> {
        Some(CropWindow {
            left_offset: self.left_offset?,
            top_offset: self.top_offset?,
            crop_width: self.crop_width?,
            crop_height: self.crop_height?,
        })
    }
}

/// Image returned by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// Base64-encoded image bytes
    pub image_data: String,
    /// Width of the returned image; the crop width when a crop was requested
    pub original_width: f64,
    /// Height of the returned image; the crop height when a crop was requested
    pub original_height: f64,
}

/// `data` object of a GraphQL answer to [`IMAGE_QUERY`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryData {
    image_resolver: Option<ImageResponse>,
}

impl ImageResponse {
    /// Parse the `data` object of a GraphQL response.
    pub fn from_query_data(json: &str) -> Result<Self, ResolveError> {
        let data: QueryData = serde_json::from_str(json)?;
        let response = data
            .image_resolver
            .ok_or_else(|| ResolveError::invalid_response("missing imageResolver"))?;
        response.validate()?;
        Ok(response)
    }

    /// Reject sizes that cannot describe an image.
    pub fn validate(&self) -> Result<(), ResolveError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(self.original_width) || !valid(self.original_height) {
            return Err(ResolveError::invalid_response(format!(
                "bad original size {}x{}",
                self.original_width, self.original_height
            )));
        }
        Ok(())
    }

    /// Size reported by the resolver.
    pub fn original_dimensions(&self) -> Dimensions {
        Dimensions::new(self.original_width, self.original_height)
    }

    /// `src` value for displaying the image.
    pub fn data_uri(&self) -> String {
        format!("{}{}", crate::constants::IMAGE_DATA_URI_PREFIX, self.image_data)
    }

    /// Raw (still encoded) image bytes.
    pub fn decode_image_data(&self) -> Result<Vec<u8>, ResolveError> {
        Ok(STANDARD.decode(&self.image_data)?)
    }
}
