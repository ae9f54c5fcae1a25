//! Boundary to the image resolver service.
//!
//! The renderer never fetches pixels itself. It builds an [`ImageRequest`]
//! (identifier, resolver backend, optional crop window) and hands it to an
//! [`ImageResolver`] implementation, which answers with the base64 image and
//! the size of the image it returned.
//!
//! ## Backends
//!
//! - **mnist**: identifiers starting with `train-images-idx3` / `t10k-images-idx3`
//! - **url**: identifiers starting with `http`
//! - **filepath**: everything else

mod classifier;
mod error;
mod fixed;
mod request;
mod traits;

pub use classifier::ResolverName;
pub use error::ResolveError;
pub use fixed::FixedResolver;
pub use request::{IMAGE_QUERY, ImageRequest, ImageResponse};
pub use traits::ImageResolver;
