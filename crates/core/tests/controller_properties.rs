//! Property-based tests for the page controller using proptest.
//!
//! Properties verified:
//! - At most one overlay is open after any event sequence
//! - The last opened overlay wins
//! - The active tab is always a declared tab
//! - Panel clicks never change state

#![allow(clippy::expect_used)]

use playbook_core::{LookupPolicy, OverlayEvent, PageController};
use proptest::prelude::*;

const TABS: [&str; 3] = ["foundations", "client-acquisition", "delivery"];
const OVERLAYS: [&str; 4] = ["tool-stack", "offer-design", "outreach", "retainers"];

#[derive(Debug, Clone)]
enum Step {
    Tab(String),
    Event(OverlayEvent),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        prop::sample::select(TABS.to_vec()).prop_map(|t| Step::Tab(t.to_string())),
        "[a-z]{1,8}".prop_map(Step::Tab),
        prop::sample::select(OVERLAYS.to_vec())
            .prop_map(|id| Step::Event(OverlayEvent::Open(id.to_string()))),
        Just(Step::Event(OverlayEvent::CloseButton)),
        Just(Step::Event(OverlayEvent::BackdropClicked)),
        Just(Step::Event(OverlayEvent::PanelClicked)),
        Just(Step::Event(OverlayEvent::EscapePressed)),
    ]
}

fn controller(policy: LookupPolicy) -> PageController {
    PageController::new("automation-agency", TABS)
        .expect("controller should build")
        .with_policy(policy)
}

fn run(controller: &mut PageController, steps: &[Step]) {
    for step in steps {
        match step {
            Step::Tab(id) => {
                let _ = controller.select_tab(id);
            }
            Step::Event(event) => {
                controller.apply(event.clone());
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_at_most_one_overlay_open(
        steps in prop::collection::vec(step(), 0..40),
        fallback in any::<bool>(),
    ) {
        let policy = if fallback { LookupPolicy::Fallback } else { LookupPolicy::Strict };
        let mut c = controller(policy);
        run(&mut c, &steps);

        let open = OVERLAYS.iter().filter(|id| c.is_open(id)).count();
        prop_assert!(open <= 1);
    }

    #[test]
    fn prop_last_open_wins(
        steps in prop::collection::vec(step(), 0..20),
        a in prop::sample::select(OVERLAYS.to_vec()),
        b in prop::sample::select(OVERLAYS.to_vec()),
    ) {
        let mut c = controller(LookupPolicy::Strict);
        run(&mut c, &steps);

        c.open_overlay(a);
        c.open_overlay(b);

        prop_assert_eq!(c.active_overlay(), Some(b));
    }

    #[test]
    fn prop_active_tab_always_declared(
        steps in prop::collection::vec(step(), 0..40),
        fallback in any::<bool>(),
    ) {
        let policy = if fallback { LookupPolicy::Fallback } else { LookupPolicy::Strict };
        let mut c = controller(policy);
        run(&mut c, &steps);

        prop_assert!(TABS.contains(&c.active_tab()));
    }

    #[test]
    fn prop_panel_click_is_inert(steps in prop::collection::vec(step(), 0..30)) {
        let mut c = controller(LookupPolicy::Strict);
        run(&mut c, &steps);

        let before = c.clone();
        c.apply(OverlayEvent::PanelClicked);
        prop_assert_eq!(c, before);
    }

    #[test]
    fn prop_close_always_reaches_closed(steps in prop::collection::vec(step(), 0..30)) {
        let mut c = controller(LookupPolicy::Strict);
        run(&mut c, &steps);

        c.close_overlay();
        prop_assert_eq!(c.active_overlay(), None);
    }
}
