//! Destination record model

use serde::{Deserialize, Serialize};

/// A named place with description and image, optionally tagged with
/// country and type labels (flat catalog shape only).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    /// Display name; country-qualified names follow `"City, Country"`
    pub name: String,
    /// Short description for the result card
    pub description: String,
    /// Image URL for the result card
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    /// Country tag (flat catalog shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Type labels such as "beach" or "temple" (flat catalog shape)
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

impl Destination {
    /// Create a new destination without country/type tags
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_url: String::new(),
            country: None,
            types: Vec::new(),
        }
    }
}

/// Tag indicating which matching branch produced a result set,
/// used only for auxiliary display logic.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// The beaches category was returned verbatim
    Beaches,
    /// The temples category was returned verbatim
    Temples,
    /// All countries' cities were returned
    Countries,
    /// Free-text scan over names
    Specific,
}
