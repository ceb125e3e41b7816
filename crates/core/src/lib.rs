//! Core types for the business playbook UI
//!
//! Everything here is plain data and pure state transitions, so it builds and
//! tests natively; the Leptos front-end wraps it in reactive signals.
//!
//! ## Module Structure
//! - `model`: pages, tabs, topic cards, and overlay content
//! - `catalog`: the built-in playbook pages
//! - `controller`: per-page tab and overlay state machine
//! - `color`: color tag to style bundle mapping
//! - `theme`: ambient page theme
//! - `keyboard`: keyboard activation rules
//! - `config`: TOML site configuration
//! - `error` / `result`: error type and Result helpers

#![forbid(unsafe_code)]

pub mod catalog;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod keyboard;
pub mod model;
pub mod result;
pub mod theme;

pub use catalog::{Catalog, slugs};
pub use color::{ColorBundle, ColorTag, resolve_bundle};
pub use config::{LookupPolicy, PlaybookConfig};
pub use controller::{OverlayEvent, OverlayState, PageController, Transition};
pub use error::Error;
pub use keyboard::{Key, activates_card};
pub use model::{ContentBlock, OverlayContent, OverlaySection, Page, ResourceLink, Tab, TopicSection};
pub use result::{Result, ResultExt};
pub use theme::Theme;

#[cfg(test)]
mod tests;
