//! Core error types for playbook operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for playbook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Lookup errors
    #[error("unknown tab '{tab}' on page '{page}'")]
    UnknownTab { page: String, tab: String },

    #[error("unknown color tag: {0}")]
    UnknownColorTag(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    // Content integrity errors
    #[error("page '{0}' declares no tabs")]
    EmptyPage(String),

    #[error("duplicate tab id '{id}' on page '{page}'")]
    DuplicateTabId { page: String, id: String },

    #[error("duplicate topic id '{id}' on page '{page}'")]
    DuplicateTopicId { page: String, id: String },

    #[error("resource '{title}' has invalid url '{url}': {reason}")]
    InvalidResourceUrl {
        title: String,
        url: String,
        reason: String,
    },

    // Parsing errors
    #[error("TOML parse error: {reason}")]
    ConfigParse { reason: String },
}

impl Error {
    /// Create an unknown tab error.
    pub fn unknown_tab(page: impl Into<String>, tab: impl Into<String>) -> Self {
        Self::UnknownTab {
            page: page.into(),
            tab: tab.into(),
        }
    }

    /// Create a duplicate topic error.
    pub fn duplicate_topic(page: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateTopicId {
            page: page.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate tab error.
    pub fn duplicate_tab(page: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateTabId {
            page: page.into(),
            id: id.into(),
        }
    }

    /// Create an invalid resource url error.
    pub fn invalid_resource_url(
        title: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResourceUrl {
            title: title.into(),
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tab_display() {
        let err = Error::unknown_tab("copywriting", "missing");
        assert_eq!(
            err.to_string(),
            "unknown tab 'missing' on page 'copywriting'"
        );
    }

    #[test]
    fn test_invalid_url_display_includes_reason() {
        let err = Error::invalid_resource_url("Docs", "not a url", "relative URL without a base");
        let text = err.to_string();
        assert!(text.contains("Docs"));
        assert!(text.contains("relative URL without a base"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = Error::UnknownColorTag("teal".to_string());
        assert_eq!(err.clone(), err);
    }
}
