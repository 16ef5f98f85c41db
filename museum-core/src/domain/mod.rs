//! Domain types for the exhibit: sections, content entries, map locations.

pub mod content;
pub mod location;
pub mod section;

pub use content::{ContentEntry, ExhibitImage, KeyPoint};
pub use location::MapLocation;
pub use section::{Icon, Section, SectionId, Tone};
