//! Narrative content attached to a section: quote, description, optional
//! image reference, key points.

use serde::{Deserialize, Serialize};

/// A key point inside a section: a named place or work with a year range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyPoint {
    pub name: String,
    pub description: String,
    pub years: String,
}

impl KeyPoint {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        years: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), description: description.into(), years: years.into() }
    }
}

/// An image attached to a section, referenced by URL.
///
/// Text front-ends render the caption and the URL as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExhibitImage {
    pub url: String,
    pub caption: String,
}

/// The full narrative block for one section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    /// Dostoevsky quote, already wrapped in «guillemets».
    pub quote: String,
    pub description: String,
    pub image: Option<ExhibitImage>,
    pub points: Vec<KeyPoint>,
}
