//! Thematic sections of the exhibit.
//!
//! The section set is closed: the exhibit always has exactly the three
//! halls of the Omsk narrative (острог, собор, слово). Making the id an
//! enum keeps every lookup total and every cross-reference checked at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a thematic section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// The prison fortress years (1850-1854).
    Ostrog,
    /// The Resurrection military cathedral.
    Sobor,
    /// The literary afterlife of the katorga experience.
    Slovo,
}

impl SectionId {
    /// All sections in exhibit order.
    pub const ALL: [SectionId; 3] = [SectionId::Ostrog, SectionId::Sobor, SectionId::Slovo];

    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Ostrog => "ostrog",
            SectionId::Sobor => "sobor",
            SectionId::Slovo => "slovo",
        }
    }

    /// Parse from the stable string form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<SectionId> {
        match s {
            "ostrog" => Some(SectionId::Ostrog),
            "sobor" => Some(SectionId::Sobor),
            "slovo" => Some(SectionId::Slovo),
            _ => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color tone of a section, resolved to a concrete style by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Crimson,
    Azure,
    Violet,
}

/// Symbolic icon attached to sections and map locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Landmark,
    Shield,
    Church,
    BookOpen,
    Home,
    Waves,
}

impl Icon {
    /// Single-cell glyph used by text front-ends.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Landmark => "◫",
            Icon::Shield => "⛨",
            Icon::Church => "✟",
            Icon::BookOpen => "❦",
            Icon::Home => "⌂",
            Icon::Waves => "≈",
        }
    }
}

/// A thematic section card: identity, titles, visual tokens, visit flag.
///
/// `visited` is monotonic: it flips to `true` the first time the section
/// is activated and never flips back within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub subtitle: String,
    pub icon: Icon,
    pub tone: Tone,
    pub visited: bool,
}

impl Section {
    pub fn new(
        id: SectionId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: Icon,
        tone: Tone,
    ) -> Self {
        Self { id, title: title.into(), subtitle: subtitle.into(), icon, tone, visited: false }
    }
}
