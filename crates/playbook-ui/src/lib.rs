//! Web front-end for the business playbooks
//!
//! Renders the `playbook-core` catalog in the browser: one page per playbook,
//! a tab strip, topic cards, and a modal guide per topic. All tab and overlay
//! state lives in a `PageController` held inside a signal, so the browser and
//! the CLI replay share one state machine.
//!
//! Built as a client-side Leptos 0.7 app for `wasm32-unknown-unknown` with
//! Trunk; see `index.html` and `playbook.toml` beside this crate's manifest.
//!
//! - `app`: root component, provides config and theme
//! - `router`: routes and site header
//! - `pages`: home, the generic playbook page, not found
//! - `components`: overlay, cards, tab strip, topic grid
//! - `state`: config, theme and page-controller contexts
//! - `error`: UI error type

#![recursion_limit = "256"]
#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;

pub use app::App;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_components_are_exported() {
        let _app = App;
        let _router = router::AppRouter;
        let _overlay = components::GuideOverlay;
        let _card = components::ClickableCard;
        let _themed = components::ThemedCard;
        let _tabs = components::TabSwitcher;
        let _grid = components::TopicGrid;
    }

    #[test]
    fn test_route_pages_are_exported() {
        let _home = pages::Home;
        let _ai = pages::AiInfluencer;
        let _agency = pages::AutomationAgency;
        let _clothing = pages::ClothingBrand;
        let _copy = pages::Copywriting;
        let _not_found = pages::NotFound;
        let _generic = pages::PlaybookPage;
    }
}
