//! Literary map locations.

use crate::domain::section::{Icon, SectionId};
use serde::{Deserialize, Serialize};

/// A place in Omsk connected to Dostoevsky's years there.
///
/// `category` is a [`SectionId`], so a location can never point at a
/// section that does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display-only coordinate string, e.g. `54.9924° N, 73.3686° E`.
    pub coordinates: String,
    pub category: SectionId,
    pub icon: Icon,
}

impl MapLocation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: impl Into<String>,
        category: SectionId,
        icon: Icon,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates: coordinates.into(),
            category,
            icon,
        }
    }
}
