//! Result alias and the fallback helper used at the UI edge.

use crate::error::Error;

/// The standard Result type for playbook operations.
///
/// # Examples
///
/// ```
/// use playbook_core::{Catalog, Result};
///
/// fn first_tab_label(slug: &str) -> Result<String> {
///     let page = Catalog::builtin().page(slug)?;
///     Ok(page.first_tab().label.clone())
/// }
///
/// assert!(first_tab_label("ai-influencer").is_ok());
/// assert!(first_tab_label("nope").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Recover from a lookup failure with a known-good value.
pub trait ResultExt<T> {
    /// The success value, or `fallback` after logging the error as a warning.
    ///
    /// Rendering code uses this where showing something sensible beats
    /// showing nothing, e.g. the first tab when the selected id is gone.
    fn or_fallback(self, fallback: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_fallback(self, fallback: T) -> T {
        self.unwrap_or_else(|error| {
            tracing::warn!(%error, "lookup failed, using fallback");
            fallback
        })
    }
}
