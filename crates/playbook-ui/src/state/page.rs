//! Per-page tab and overlay controller hook
//!
//! Wraps `playbook_core::PageController` in a signal so every page shares the
//! same state machine. Memos sit in front of the controller so the tab panel
//! only re-renders when the tab changes and overlays only when the open id
//! changes.

use leptos::logging::warn;
use leptos::prelude::*;
use playbook_core::{OverlayEvent, Page, PageController, PlaybookConfig, Transition};

use crate::error::Result;

/// Copyable handle to one page's UI state
#[derive(Debug, Clone, Copy)]
pub struct PageControls {
    state: RwSignal<PageController>,
    active_tab: Memo<String>,
    active_overlay: Memo<Option<String>>,
}

impl PageControls {
    #[must_use]
    pub fn new(controller: PageController) -> Self {
        let state = RwSignal::new(controller);
        let active_tab = Memo::new(move |_| state.with(|c| c.active_tab().to_string()));
        let active_overlay =
            Memo::new(move |_| state.with(|c| c.active_overlay().map(str::to_string)));
        Self {
            state,
            active_tab,
            active_overlay,
        }
    }

    /// Selected tab id (reactive)
    #[must_use]
    pub fn active_tab(&self) -> String {
        self.active_tab.get()
    }

    #[must_use]
    pub fn is_tab_active(&self, id: &str) -> bool {
        self.active_tab.with(|active| active == id)
    }

    /// Open overlay id, if any (reactive)
    #[must_use]
    pub fn active_overlay(&self) -> Option<String> {
        self.active_overlay.get()
    }

    /// Whether the overlay with this id is open (reactive)
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.active_overlay.with(|open| open.as_deref() == Some(id))
    }

    /// Reactive open flag for one overlay, suitable for `GuideOverlay`.
    #[must_use]
    pub fn open_signal(&self, id: impl Into<String>) -> Signal<bool> {
        let id = id.into();
        let controls = *self;
        Signal::derive(move || controls.is_open(&id))
    }

    /// Select a tab; an unknown id under the strict policy is logged and
    /// ignored.
    pub fn select_tab(&self, id: &str) {
        if let Some(Err(e)) = self.state.try_update(|c| c.select_tab(id)) {
            warn!("{e}");
        }
    }

    pub fn open_overlay(&self, id: &str) {
        self.apply(OverlayEvent::Open(id.to_string()));
    }

    /// Apply an overlay event and report what changed.
    ///
    /// Overlay dismissals arrive here unchanged, so the controller alone
    /// decides whether Escape or a backdrop click closes anything.
    pub fn apply(&self, event: OverlayEvent) -> Transition {
        self.state
            .try_update(|c| c.apply(event))
            .unwrap_or(Transition::Unchanged)
    }
}

/// Build the controls for a page using the site config.
///
/// # Errors
/// Returns `UiError::Playbook` if the page declares no tabs or repeats a tab id.
pub fn use_page_controller(page: &Page, config: &PlaybookConfig) -> Result<PageControls> {
    let controller = PageController::for_page(page)?
        .with_policy(config.lookup_policy)
        .with_close_on_escape(config.close_on_escape);
    Ok(PageControls::new(controller))
}
