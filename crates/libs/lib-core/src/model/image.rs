//! # Image Reference
//!
//! A resolvable URI pointing at the image that will be minted. Set once per
//! successful generation (or fixed for the static screen).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Resolvable image URI. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    /// Wrap a URI, rejecting blank strings.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput("Image reference must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the metadata `files` list.
    ///
    /// Derived from the extension of the last path segment; query strings and
    /// fragments are ignored. Unknown extensions fall back to `image/png`, the
    /// format the image generator returns.
    ///
    /// ```rust
    /// use lib_core::model::ImageReference;
    ///
    /// let img = ImageReference::new("https://cdn.example/fox.JPG?sig=1").unwrap();
    /// assert_eq!(img.mime_type(), "image/jpeg");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        let without_query = self.0.split(['?', '#']).next().unwrap_or_default();
        let last_segment = without_query.rsplit('/').next().unwrap_or_default();
        let extension = match last_segment.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return "image/png",
        };

        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "image/png",
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImageReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
