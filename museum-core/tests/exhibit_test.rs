//! Integration tests for the exhibit state machine.
//!
//! Tests:
//! 1. The canonical walkthrough: progress climbs 33 → 67 → 100
//! 2. Selection toggle semantics on the literary map
//! 3. Detail content: key points render in editorial order
//! 4. Visited flags are monotonic across arbitrary navigation

use museum_core::{Certificate, Exhibit, SectionId};

#[test]
fn walkthrough_progress_climbs_by_thirds() {
    let mut ex = Exhibit::open().unwrap();
    assert_eq!(ex.progress().display_percent(), 0);

    ex.activate(Some(SectionId::Ostrog));
    assert_eq!(ex.progress().display_percent(), 33);

    ex.activate(None);
    ex.activate(Some(SectionId::Sobor));
    assert_eq!(ex.progress().display_percent(), 67);

    ex.activate(None);
    ex.activate(Some(SectionId::Slovo));
    assert_eq!(ex.progress().display_percent(), 100);
    assert!(ex.is_complete());
}

#[test]
fn completion_is_order_independent() {
    let orders = [
        [SectionId::Ostrog, SectionId::Sobor, SectionId::Slovo],
        [SectionId::Slovo, SectionId::Ostrog, SectionId::Sobor],
        [SectionId::Sobor, SectionId::Slovo, SectionId::Ostrog],
    ];
    for order in orders {
        let mut ex = Exhibit::open().unwrap();
        for id in order {
            ex.activate(Some(id));
        }
        assert!(ex.is_complete(), "{order:?}");
        assert_eq!(ex.progress().display_percent(), 100);
    }
}

#[test]
fn revisiting_does_not_inflate_progress() {
    let mut ex = Exhibit::open().unwrap();
    for _ in 0..5 {
        ex.activate(Some(SectionId::Ostrog));
        ex.activate(None);
    }
    assert_eq!(ex.visited_count(), 1);
    assert_eq!(ex.progress().display_percent(), 33);
}

#[test]
fn toggling_the_same_location_twice_clears_selection() {
    let mut ex = Exhibit::open().unwrap();
    ex.toggle_select("loc3");
    assert_eq!(ex.selected(), Some("loc3"));
    ex.toggle_select("loc3");
    assert_eq!(ex.selected(), None);
}

#[test]
fn selecting_a_second_location_replaces_the_first() {
    let mut ex = Exhibit::open().unwrap();
    ex.toggle_select("loc1");
    ex.toggle_select("loc4");
    assert_eq!(ex.selected(), Some("loc4"));
    // Exactly one location selected at a time.
    let selected = ex.locations().iter().filter(|l| ex.is_selected(&l.id)).count();
    assert_eq!(selected, 1);
}

#[test]
fn returning_to_overview_preserves_selection() {
    let mut ex = Exhibit::open().unwrap();
    ex.toggle_select("loc2");
    ex.activate(Some(SectionId::Sobor));
    ex.activate(None);
    assert_eq!(ex.selected(), Some("loc2"));
}

#[test]
fn ostrog_detail_lists_its_three_points_in_order() {
    let mut ex = Exhibit::open().unwrap();
    ex.activate(Some(SectionId::Ostrog));
    let content = ex.active_content().unwrap();

    let names: Vec<&str> = content.points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Острожный двор", "Казарма №7", "Кузница"]);

    let years: Vec<&str> = content.points.iter().map(|p| p.years.as_str()).collect();
    assert_eq!(years, ["1850-1854", "1850", "1851-1853"]);
}

#[test]
fn active_section_card_matches_active_id() {
    let mut ex = Exhibit::open().unwrap();
    ex.activate(Some(SectionId::Slovo));
    let card = ex.active_section().unwrap();
    assert_eq!(card.id, SectionId::Slovo);
    assert_eq!(card.title, "Слово");
    assert!(card.visited);
}

#[test]
fn certificate_requires_the_full_walkthrough() {
    let mut ex = Exhibit::open().unwrap();
    assert!(Certificate::issue(&ex).is_none());

    ex.activate(Some(SectionId::Ostrog));
    ex.activate(Some(SectionId::Sobor));
    assert!(Certificate::issue(&ex).is_none());

    ex.activate(Some(SectionId::Slovo));
    let cert = Certificate::issue(&ex).unwrap();
    assert_eq!(cert.sections.len(), 3);
}
