//! Resolver selection from an image identifier.

use serde::{Deserialize, Serialize};

/// Identifier prefixes of the MNIST training and test image files.
const MNIST_PREFIXES: &[&str] = &["train-images-idx3", "t10k-images-idx3"];

/// Backend the resolver service should use for an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverName {
    /// Image inside an MNIST idx3 archive
    Mnist,
    /// Remote image fetched over HTTP(S)
    Url,
    /// Image on the resolver's filesystem
    #[default]
    Filepath,
}

impl ResolverName {
    /// Classify an identifier. Prefix tests are case-sensitive; the first match wins.
    pub fn classify(identifier: &str) -> Self {
        if MNIST_PREFIXES.iter().any(|p| identifier.starts_with(p)) {
            ResolverName::Mnist
        } else if identifier.starts_with("http") {
            ResolverName::Url
        } else {
            ResolverName::Filepath
        }
    }

    /// Wire name of this resolver.
    pub fn name(&self) -> &'static str {
        match self {
            ResolverName::Mnist => "mnist",
            ResolverName::Url => "url",
            ResolverName::Filepath => "filepath",
        }
    }
}
