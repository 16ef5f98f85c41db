//! Museum Core — exhibit model for the "Омск Достоевского" virtual museum.
//!
//! This crate contains everything below the terminal front-end:
//! - Domain types (sections, content entries, map locations)
//! - The static catalog with the full narrative dataset
//! - The exhibit state machine (active section, selected location)
//! - Visit progress derivation
//! - Completion certificate with a deterministic fingerprint

pub mod catalog;
pub mod certificate;
pub mod domain;
pub mod exhibit;
pub mod progress;

pub use catalog::{Catalog, CatalogError};
pub use certificate::{Certificate, QUEST_HASHTAG};
pub use domain::{ContentEntry, Icon, MapLocation, Section, SectionId, Tone};
pub use exhibit::Exhibit;
pub use progress::Progress;
