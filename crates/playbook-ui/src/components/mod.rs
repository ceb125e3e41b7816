//! Reusable UI components
//!
//! - `guide_overlay`: modal guide with backdrop and close button
//! - `clickable_card`: keyboard-accessible card
//! - `themed_card`: theme-aware surface
//! - `tab_switcher`: tab strip bound to `PageControls`
//! - `topic_grid`: topic cards with their overlays
//! - `rich_content`: renders catalog content blocks

pub mod clickable_card;
pub mod guide_overlay;
pub mod rich_content;
pub mod tab_switcher;
pub mod themed_card;
pub mod topic_grid;

pub use clickable_card::ClickableCard;
pub use guide_overlay::{GuideOverlay, GuideSection};
pub use rich_content::RichContent;
pub use tab_switcher::TabSwitcher;
pub use themed_card::ThemedCard;
pub use topic_grid::TopicGrid;
