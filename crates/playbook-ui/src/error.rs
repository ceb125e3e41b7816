//! Error types for Leptos UI components
//!
//! UI failures are never fatal: callers log them and render a fallback
//! (the Not Found page, default config, or the first tab).

use playbook_core::Error as PlaybookError;
use thiserror::Error;

/// Errors that can occur in Leptos UI components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Route not found
    #[error("Route not found: {0}")]
    RouteNotFound(String),
    /// Lookup or validation failure from the core crate
    #[error(transparent)]
    Playbook(#[from] PlaybookError),
    /// Embedded configuration could not be used
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::RouteNotFound("/invalid".to_string());
        assert_eq!(error.to_string(), "Route not found: /invalid");

        let error = UiError::Config("bad theme".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: bad theme");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let error: UiError = PlaybookError::UnknownPage("nope".to_string()).into();
        assert_eq!(error.to_string(), "unknown page: nope");
    }

    #[test]
    fn test_result_type() {
        let success: Result<i32> = Ok(42);
        assert!(success.is_ok());

        let failure: Result<i32> = Err(UiError::Config("failed".to_string()));
        assert!(failure.is_err());
    }
}
