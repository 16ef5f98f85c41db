//! Property tests for exhibit invariants.
//!
//! Uses proptest to verify, over random action interleavings:
//! 1. Visited flags are monotonic — never flip back to false
//! 2. At most one location is selected at any time
//! 3. Progress percentage stays within [0, 100] and never decreases
//! 4. At most one section is active at any time

use museum_core::{Exhibit, SectionId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Activate(SectionId),
    Back,
    Toggle(String),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(SectionId::ALL.to_vec()).prop_map(Action::Activate),
        Just(Action::Back),
        prop::sample::select(vec!["loc1", "loc2", "loc3", "loc4", "loc5", "loc99"])
            .prop_map(|s| Action::Toggle(s.to_owned())),
    ]
}

fn apply(ex: &mut Exhibit, action: &Action) {
    match action {
        Action::Activate(id) => ex.activate(Some(*id)),
        Action::Back => ex.activate(None),
        Action::Toggle(id) => ex.toggle_select(id),
    }
}

proptest! {
    /// Once a section is visited it stays visited, whatever happens next.
    #[test]
    fn visited_is_monotonic(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut ex = Exhibit::open().unwrap();
        let mut seen: Vec<SectionId> = Vec::new();

        for action in &actions {
            apply(&mut ex, action);
            if let Action::Activate(id) = action {
                if !seen.contains(id) {
                    seen.push(*id);
                }
            }
            for id in &seen {
                let still = ex.sections().iter().find(|s| s.id == *id).map(|s| s.visited);
                prop_assert_eq!(still, Some(true));
            }
        }
    }

    /// The map never holds more than one selection.
    #[test]
    fn at_most_one_selected(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut ex = Exhibit::open().unwrap();
        for action in &actions {
            apply(&mut ex, action);
            let selected = ex
                .locations()
                .iter()
                .filter(|l| ex.is_selected(&l.id))
                .count();
            prop_assert!(selected <= 1);
            // A selection, if present, always names a real location.
            if let Some(id) = ex.selected() {
                prop_assert!(ex.locations().iter().any(|l| l.id == id));
            }
        }
    }

    /// Progress is bounded and never decreases.
    #[test]
    fn progress_is_bounded_and_nondecreasing(
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut ex = Exhibit::open().unwrap();
        let mut last = ex.progress().percent();

        for action in &actions {
            apply(&mut ex, action);
            let now = ex.progress().percent();
            prop_assert!((0.0..=100.0).contains(&now));
            prop_assert!(now >= last);
            last = now;
        }
    }

    /// Active section is a single optional value consistent with its card.
    #[test]
    fn active_section_is_consistent(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut ex = Exhibit::open().unwrap();
        for action in &actions {
            apply(&mut ex, action);
            match ex.active() {
                Some(id) => {
                    let card = ex.active_section();
                    prop_assert_eq!(card.map(|s| s.id), Some(id));
                    prop_assert!(ex.active_content().is_some());
                }
                None => {
                    prop_assert!(ex.active_section().is_none());
                    prop_assert!(ex.active_content().is_none());
                }
            }
        }
    }
}
