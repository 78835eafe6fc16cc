//! Image references returned by the catalog.

use serde::{Deserialize, Serialize};

/// An image asset attached to a product or variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Image {
    /// URL to the image file.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Image width in pixels.
    pub width: Option<i32>,
    /// Image height in pixels.
    pub height: Option<i32>,
}

impl Image {
    /// Create an image from a URL alone.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }
}
