//! Site configuration loaded from TOML
//!
//! ```toml
//! site_title = "Business Playbooks"
//! theme = "gradient"
//! lookup_policy = "fallback"
//! close_on_escape = true
//! landing_page = "ai-influencer"
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::result::Result;
use crate::theme::Theme;

/// How lookups of unknown tab ids and color names are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Unknown keys are errors; state stays as it was
    Strict,
    /// Unknown keys resolve to the first tab / neutral colors
    Fallback,
}

impl Default for LookupPolicy {
    /// Strict in debug builds, fallback in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Fallback
        }
    }
}

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybookConfig {
    pub site_title: String,
    pub theme: Theme,
    pub lookup_policy: LookupPolicy,
    pub close_on_escape: bool,
    pub landing_page: Option<String>,
}

impl Default for PlaybookConfig {
    fn default() -> Self {
        Self {
            site_title: "Business Playbooks".to_string(),
            theme: Theme::default(),
            lookup_policy: LookupPolicy::default(),
            close_on_escape: true,
            landing_page: None,
        }
    }
}

impl PlaybookConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` for malformed TOML, unknown keys, or
    /// values outside their enumerations.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::config_parse(e.to_string()))
    }

    /// Render the config back to TOML.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config_parse(e.to_string()))
    }

    /// Check references into the catalog.
    ///
    /// # Errors
    /// Returns `Error::UnknownPage` if `landing_page` names no page.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        match &self.landing_page {
            Some(slug) => catalog.page(slug).map(|_| ()),
            None => Ok(()),
        }
    }
}
