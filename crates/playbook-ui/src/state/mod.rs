//! Application state management
//!
//! - `config`: site configuration, embedded at build time
//! - `theme`: ambient theme context, read-only for components
//! - `page`: per-page tab and overlay controller

pub mod config;
pub mod page;
pub mod theme;

pub use config::{load_config, parse_config, provide_config, use_config};
pub use page::{PageControls, use_page_controller};
pub use theme::{ThemeContext, provide_theme, use_theme, use_theme_context};
