//! Site configuration context
//!
//! `playbook.toml` at the crate root is embedded at compile time. A bad file
//! never stops the app: the error is logged and defaults are used.

use leptos::logging::error;
use leptos::prelude::*;
use playbook_core::{Catalog, PlaybookConfig};

use crate::error::{Result, UiError};

const EMBEDDED_CONFIG: &str = include_str!("../../playbook.toml");

/// Parse and validate config text against the built-in catalog.
///
/// # Errors
/// Returns `UiError::Config` for malformed TOML or a landing page that is not
/// in the catalog.
pub fn parse_config(text: &str) -> Result<PlaybookConfig> {
    let config = PlaybookConfig::from_toml_str(text).map_err(|e| UiError::Config(e.to_string()))?;
    config
        .validate(Catalog::builtin())
        .map_err(|e| UiError::Config(e.to_string()))?;
    Ok(config)
}

/// Load the embedded config, falling back to defaults.
#[must_use]
pub fn load_config() -> PlaybookConfig {
    parse_config(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        error!("{e}; using default configuration");
        PlaybookConfig::default()
    })
}

pub fn provide_config(config: PlaybookConfig) {
    provide_context(config);
}

/// Current config, or defaults outside an `App`.
#[must_use]
pub fn use_config() -> PlaybookConfig {
    use_context::<PlaybookConfig>().unwrap_or_default()
}
