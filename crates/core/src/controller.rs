//! Per-page tab and overlay state machine
//!
//! Every playbook page holds the same two pieces of state: the active tab and
//! the open overlay. [`PageController`] owns both so pages share one
//! implementation instead of wiring their own.
//!
//! Overlay states are `Closed` and `Open(id)`. `open_overlay` moves from any
//! state to `Open(id)`; `close_overlay` moves from any state to `Closed`.
//! There is a single slot, so opening a second overlay replaces the first.

use std::collections::HashSet;
use std::fmt;

use crate::config::LookupPolicy;
use crate::error::Error;
use crate::model::Page;
use crate::result::Result;

/// Which overlay, if any, is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(String),
}

impl OverlayState {
    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id.as_str()),
        }
    }
}

/// User input that can change overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A topic card was activated
    Open(String),
    /// The overlay's close control was activated
    CloseButton,
    /// The dimmed area outside the panel was clicked
    BackdropClicked,
    /// Something inside the panel was clicked
    PanelClicked,
    /// Escape was pressed while the overlay had focus
    EscapePressed,
}

/// Result of applying an [`OverlayEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened(String),
    Closed(String),
    Unchanged,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened(id) => write!(f, "opened {id}"),
            Self::Closed(id) => write!(f, "closed {id}"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Active tab plus the single overlay slot for one page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController {
    page: String,
    tabs: Vec<String>,
    active_tab: usize,
    overlay: OverlayState,
    policy: LookupPolicy,
    close_on_escape: bool,
}

impl PageController {
    /// Creates a controller with the first tab active and no overlay open.
    ///
    /// # Errors
    /// - `Error::EmptyPage` if `tab_ids` is empty
    /// - `Error::DuplicateTabId` if an id repeats
    pub fn new<I, S>(page: impl Into<String>, tab_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let page = page.into();
        let tabs: Vec<String> = tab_ids.into_iter().map(Into::into).collect();

        if tabs.is_empty() {
            return Err(Error::EmptyPage(page));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = tabs.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(Error::duplicate_tab(&page, dup));
        }

        Ok(Self {
            page,
            tabs,
            active_tab: 0,
            overlay: OverlayState::Closed,
            policy: LookupPolicy::default(),
            close_on_escape: true,
        })
    }

    /// Creates a controller for a page's declared tabs.
    ///
    /// # Errors
    /// Same as [`PageController::new`].
    pub fn for_page(page: &Page) -> Result<Self> {
        Self::new(page.slug.clone(), page.tab_ids())
    }

    /// Builder pattern: set the unknown-tab policy
    #[must_use]
    pub const fn with_policy(mut self, policy: LookupPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder pattern: enable or disable Escape-to-close
    #[must_use]
    pub const fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    #[must_use]
    pub fn tab_ids(&self) -> &[String] {
        &self.tabs
    }

    #[must_use]
    pub const fn policy(&self) -> LookupPolicy {
        self.policy
    }

    /// Currently selected tab id; always one of the declared ids.
    #[must_use]
    pub fn active_tab(&self) -> &str {
        self.tabs
            .get(self.active_tab)
            .or_else(|| self.tabs.first())
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_tab_active(&self, id: &str) -> bool {
        self.active_tab() == id
    }

    #[must_use]
    pub const fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    #[must_use]
    pub fn active_overlay(&self) -> Option<&str> {
        self.overlay.open_id()
    }

    /// Whether the overlay with this id is the open one
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.active_overlay() == Some(id)
    }

    /// Select a tab. Switching tabs closes any open overlay.
    ///
    /// An unknown id selects the first tab under [`LookupPolicy::Fallback`].
    ///
    /// # Errors
    /// Returns `Error::UnknownTab` for an unknown id under
    /// [`LookupPolicy::Strict`]; the state is left unchanged.
    pub fn select_tab(&mut self, id: &str) -> Result<()> {
        let index = match (self.tabs.iter().position(|t| t == id), self.policy) {
            (Some(index), _) => index,
            (None, LookupPolicy::Strict) => return Err(Error::unknown_tab(&self.page, id)),
            (None, LookupPolicy::Fallback) => {
                tracing::warn!(page = %self.page, tab = id, "unknown tab, selecting first tab");
                0
            }
        };

        if index != self.active_tab {
            tracing::debug!(page = %self.page, from = self.active_tab(), to = id, "tab selected");
            self.active_tab = index;
            self.close_overlay();
        }
        Ok(())
    }

    /// Open an overlay, replacing any open one.
    ///
    /// The id is not checked against the page; an id that matches no topic
    /// opens nothing on screen.
    pub fn open_overlay(&mut self, id: impl Into<String>) -> Transition {
        let id = id.into();
        if self.is_open(&id) {
            return Transition::Unchanged;
        }
        tracing::debug!(page = %self.page, overlay = %id, "overlay opened");
        self.overlay = OverlayState::Open(id.clone());
        Transition::Opened(id)
    }

    /// Close whatever overlay is open.
    pub fn close_overlay(&mut self) -> Transition {
        match std::mem::take(&mut self.overlay) {
            OverlayState::Closed => Transition::Unchanged,
            OverlayState::Open(id) => {
                tracing::debug!(page = %self.page, overlay = %id, "overlay closed");
                Transition::Closed(id)
            }
        }
    }

    /// Apply a user event to the overlay slot.
    pub fn apply(&mut self, event: OverlayEvent) -> Transition {
        match event {
            OverlayEvent::Open(id) => self.open_overlay(id),
            OverlayEvent::CloseButton | OverlayEvent::BackdropClicked => self.close_overlay(),
            OverlayEvent::EscapePressed if self.close_on_escape => self.close_overlay(),
            OverlayEvent::EscapePressed | OverlayEvent::PanelClicked => Transition::Unchanged,
        }
    }
}
