//! Exhibit state machine.
//!
//! A single owner holds all mutable state: which section is active (detail
//! view) and which map location is selected. Everything else is derived on
//! demand from the catalog and the visited flags.

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{ContentEntry, MapLocation, Section, SectionId};
use crate::progress::Progress;

/// The running exhibit: catalog plus visitor state.
///
/// Invariants held by construction:
/// - at most one active section,
/// - at most one selected location,
/// - `visited` flags only ever flip `false → true`.
#[derive(Debug, Clone)]
pub struct Exhibit {
    catalog: Catalog,
    active: Option<SectionId>,
    selected: Option<String>,
}

impl Exhibit {
    /// Build an exhibit over a validated catalog.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog, active: None, selected: None })
    }

    /// Open the default Omsk exhibit.
    pub fn open() -> Result<Self, CatalogError> {
        Self::new(Catalog::default_omsk())
    }

    /// Enter a section (marking it visited) or return to the overview.
    ///
    /// Activating `None` leaves the location selection untouched, so the
    /// overview comes back exactly as it was left.
    pub fn activate(&mut self, id: Option<SectionId>) {
        if let Some(id) = id {
            if let Some(section) = self.catalog.sections.iter_mut().find(|s| s.id == id) {
                section.visited = true;
            }
        }
        self.active = id;
    }

    /// Toggle the selection of a map location.
    ///
    /// Selecting the already-selected location collapses the selection;
    /// selecting another replaces it. Unknown ids are ignored.
    pub fn toggle_select(&mut self, location_id: &str) {
        if !self.catalog.locations.iter().any(|l| l.id == location_id) {
            return;
        }
        if self.selected.as_deref() == Some(location_id) {
            self.selected = None;
        } else {
            self.selected = Some(location_id.to_owned());
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.catalog.sections
    }

    pub fn locations(&self) -> &[MapLocation] {
        &self.catalog.locations
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// The full section card for the active section, if any.
    pub fn active_section(&self) -> Option<&Section> {
        let id = self.active?;
        self.catalog.sections.iter().find(|s| s.id == id)
    }

    /// The narrative content for the active section, if any.
    pub fn active_content(&self) -> Option<&ContentEntry> {
        Some(self.catalog.content(self.active?))
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, location_id: &str) -> bool {
        self.selected.as_deref() == Some(location_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visited_count(&self) -> usize {
        self.catalog.sections.iter().filter(|s| s.visited).count()
    }

    pub fn progress(&self) -> Progress {
        Progress { visited: self.visited_count(), total: self.catalog.sections.len() }
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Ids of visited sections in exhibit order.
    pub fn visited_sections(&self) -> Vec<SectionId> {
        self.catalog.sections.iter().filter(|s| s.visited).map(|s| s.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_nothing_active_or_selected() {
        let ex = Exhibit::open().unwrap();
        assert_eq!(ex.active(), None);
        assert_eq!(ex.selected(), None);
        assert_eq!(ex.visited_count(), 0);
    }

    #[test]
    fn activating_marks_visited_once() {
        let mut ex = Exhibit::open().unwrap();
        ex.activate(Some(SectionId::Ostrog));
        assert_eq!(ex.visited_count(), 1);
        // Re-entering the same hall does not double-count.
        ex.activate(None);
        ex.activate(Some(SectionId::Ostrog));
        assert_eq!(ex.visited_count(), 1);
    }

    #[test]
    fn returning_to_overview_keeps_visited() {
        let mut ex = Exhibit::open().unwrap();
        ex.activate(Some(SectionId::Sobor));
        ex.activate(None);
        assert_eq!(ex.active(), None);
        assert_eq!(ex.visited_count(), 1);
    }

    #[test]
    fn active_content_follows_active_section() {
        let mut ex = Exhibit::open().unwrap();
        assert!(ex.active_content().is_none());
        ex.activate(Some(SectionId::Slovo));
        let content = ex.active_content().unwrap();
        assert!(content.quote.contains("тайна"));
    }

    #[test]
    fn toggle_unknown_location_is_a_noop() {
        let mut ex = Exhibit::open().unwrap();
        ex.toggle_select("loc99");
        assert_eq!(ex.selected(), None);
    }

    #[test]
    fn selection_is_single_and_collapsible() {
        let mut ex = Exhibit::open().unwrap();
        ex.toggle_select("loc1");
        assert!(ex.is_selected("loc1"));
        ex.toggle_select("loc2");
        assert!(ex.is_selected("loc2"));
        assert!(!ex.is_selected("loc1"));
        ex.toggle_select("loc2");
        assert_eq!(ex.selected(), None);
    }
}
