//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here: the exhibit itself plus cursors, overlay,
//! and the status message channel.

use anyhow::Result;
use museum_core::{Exhibit, SectionId};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
}

/// An item under the overview cursor: a section card or a map location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewItem {
    Section(SectionId),
    Location(String),
}

/// Top-level application state.
pub struct AppState {
    pub exhibit: Exhibit,
    pub running: bool,

    /// Flat cursor over the overview rows: sections first, then locations.
    pub overview_cursor: usize,
    /// Line offset into the detail view.
    pub detail_scroll: usize,

    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let exhibit = Exhibit::open()?;
        Ok(Self {
            exhibit,
            running: true,
            overview_cursor: 0,
            detail_scroll: 0,
            overlay: Overlay::Welcome,
            status_message: None,
        })
    }

    /// Total navigable rows on the overview.
    pub fn overview_row_count(&self) -> usize {
        self.exhibit.sections().len() + self.exhibit.locations().len()
    }

    /// Resolve the overview cursor to a section card or a map location.
    pub fn cursor_item(&self) -> Option<OverviewItem> {
        let sections = self.exhibit.sections();
        if self.overview_cursor < sections.len() {
            return Some(OverviewItem::Section(sections[self.overview_cursor].id));
        }
        let loc_idx = self.overview_cursor - sections.len();
        self.exhibit
            .locations()
            .get(loc_idx)
            .map(|l| OverviewItem::Location(l.id.clone()))
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
