//! Built-in playbook catalog
//!
//! The four playbook pages are assembled once, on first access, and shared by
//! reference for the rest of the session.

mod ai_influencer;
mod automation_agency;
mod clothing_brand;
mod copywriting;

use std::sync::LazyLock;

use crate::error::Error;
use crate::model::Page;
use crate::result::Result;

/// Page slugs, also used as route segments
pub mod slugs {
    pub const AI_INFLUENCER: &str = "ai-influencer";
    pub const AUTOMATION_AGENCY: &str = "automation-agency";
    pub const CLOTHING_BRAND: &str = "clothing-brand";
    pub const COPYWRITING: &str = "copywriting";

    /// All slugs in navigation order
    pub const ALL: [&str; 4] = [AI_INFLUENCER, AUTOMATION_AGENCY, CLOTHING_BRAND, COPYWRITING];
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(vec![
        ai_influencer::page(),
        automation_agency::page(),
        clothing_brand::page(),
        copywriting::page(),
    ])
});

/// An ordered collection of playbook pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pages: Vec<Page>,
}

impl Catalog {
    #[must_use]
    pub const fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// The built-in catalog, constructed on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by slug.
    ///
    /// # Errors
    /// Returns `Error::UnknownPage` if no page has this slug.
    pub fn page(&self, slug: &str) -> Result<&Page> {
        self.pages
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| Error::UnknownPage(slug.to_string()))
    }

    /// Validate every page.
    ///
    /// # Errors
    /// Returns the first page error found; see [`Page::validate`].
    pub fn validate(&self) -> Result<()> {
        self.pages.iter().try_for_each(Page::validate)
    }

    /// Total topic count across all pages
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.pages.iter().map(|p| p.topics().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_builtin_validates() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_builtin_pages_in_slug_order() {
        let order: Vec<&str> = Catalog::builtin()
            .pages()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(order, slugs::ALL);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(
            Catalog::builtin().page("dropshipping"),
            Err(Error::UnknownPage("dropshipping".to_string()))
        );
    }

    #[test]
    fn test_every_page_has_topics() {
        for page in Catalog::builtin().pages() {
            for tab in &page.tabs {
                assert!(!tab.topics.is_empty(), "{}/{} has no topics", page.slug, tab.id);
            }
        }
        assert!(Catalog::builtin().topic_count() > 0);
    }
}
