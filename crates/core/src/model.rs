//! Playbook content model
//!
//! A [`Page`] declares tabs, each tab holds [`TopicSection`] cards, and each
//! card expands into an [`OverlayContent`] guide. Everything here is built once
//! and never mutated afterwards.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::color::ColorTag;
use crate::config::LookupPolicy;
use crate::error::Error;
use crate::result::Result;

/// An outbound link shown under an overlay section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Links must be absolute `http`/`https` URLs so they can open in a new
    /// browsing context.
    ///
    /// # Errors
    /// Returns `Error::InvalidResourceUrl` when the URL does not parse or uses
    /// another scheme.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.url)
            .map_err(|e| Error::invalid_resource_url(&self.title, &self.url, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::invalid_resource_url(
                &self.title,
                &self.url,
                format!("unsupported scheme '{other}'"),
            )),
        }
    }

    /// Host name for display next to the link, if any.
    #[must_use]
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// One block of rich section content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph(String),
    Subheading(String),
    Bullets(Vec<String>),
    Steps(Vec<String>),
    Tip { label: String, text: String },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Self::Subheading(text.into())
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Bullets(items.into_iter().map(Into::into).collect())
    }

    pub fn steps<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Steps(items.into_iter().map(Into::into).collect())
    }

    pub fn tip(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Tip {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// One colored section inside a guide overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySection {
    pub title: String,
    pub color: ColorTag,
    pub content: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
}

impl OverlaySection {
    pub fn new(title: impl Into<String>, color: ColorTag) -> Self {
        Self {
            title: title.into(),
            color,
            content: Vec::new(),
            resources: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Builder pattern: append a content block
    #[must_use]
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }

    /// Builder pattern: append a resource link
    #[must_use]
    pub fn with_resource(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.resources.push(ResourceLink::new(title, url));
        self
    }

    /// Builder pattern: set checklist items
    #[must_use]
    pub fn with_checklist<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checklist = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    #[must_use]
    pub fn has_checklist(&self) -> bool {
        !self.checklist.is_empty()
    }
}

/// Expanded guide shown when a topic card is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<OverlaySection>,
}

impl OverlayContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: OverlaySection) -> Self {
        self.sections.push(section);
        self
    }
}

/// A clickable topic card and the guide behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: ColorTag,
    pub overlay: OverlayContent,
}

impl TopicSection {
    /// Creates a topic whose overlay title defaults to the card title
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: ColorTag) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            overlay: OverlayContent::new(title.clone()),
            title,
            description: String::new(),
            icon: String::new(),
            color,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayContent) -> Self {
        self.overlay = overlay;
        self
    }
}

/// One tab of a playbook page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub topics: Vec<TopicSection>,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
            intro: None,
            topics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: TopicSection) -> Self {
        self.topics.push(topic);
        self
    }
}

/// A playbook page: a title plus an ordered set of tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub tabs: Vec<Tab>,
}

impl Page {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            tagline: String::new(),
            tabs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    #[must_use]
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Declared tab ids, in order
    pub fn tab_ids(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.id.as_str())
    }

    /// The default tab.
    ///
    /// Pages are validated non-empty when the catalog is built; an empty page
    /// here means a page was assembled outside the catalog, so an empty
    /// placeholder tab is returned rather than panicking.
    #[must_use]
    pub fn first_tab(&self) -> &Tab {
        self.tabs.first().unwrap_or(&EMPTY_TAB)
    }

    /// Strict tab lookup.
    ///
    /// # Errors
    /// Returns `Error::UnknownTab` if no tab has this id.
    pub fn tab(&self, id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::unknown_tab(&self.slug, id))
    }

    /// Tab lookup honoring the lookup policy.
    ///
    /// # Errors
    /// Returns `Error::UnknownTab` under the strict policy.
    pub fn resolve_tab(&self, id: &str, policy: LookupPolicy) -> Result<&Tab> {
        match (self.tab(id), policy) {
            (Ok(tab), _) => Ok(tab),
            (Err(e), LookupPolicy::Strict) => Err(e),
            (Err(_), LookupPolicy::Fallback) => {
                tracing::warn!(page = %self.slug, tab = id, "unknown tab, showing first tab");
                Ok(self.first_tab())
            }
        }
    }

    /// Find a topic on any tab of this page
    #[must_use]
    pub fn topic(&self, id: &str) -> Option<&TopicSection> {
        self.tabs
            .iter()
            .flat_map(|t| t.topics.iter())
            .find(|topic| topic.id == id)
    }

    /// All topics across all tabs, in tab order
    pub fn topics(&self) -> impl Iterator<Item = &TopicSection> {
        self.tabs.iter().flat_map(|t| t.topics.iter())
    }

    /// Check the page's structural conventions.
    ///
    /// # Errors
    /// - `Error::EmptyPage` if no tabs are declared
    /// - `Error::DuplicateTabId` if two tabs share an id
    /// - `Error::DuplicateTopicId` if two topics on the page share an id
    /// - `Error::InvalidResourceUrl` for a malformed resource link
    pub fn validate(&self) -> Result<()> {
        if self.tabs.is_empty() {
            return Err(Error::EmptyPage(self.slug.clone()));
        }

        if let Some(dup) = self.tab_ids().duplicates().next() {
            return Err(Error::duplicate_tab(&self.slug, dup));
        }

        if let Some(dup) = self.topics().map(|t| t.id.as_str()).duplicates().next() {
            return Err(Error::duplicate_topic(&self.slug, dup));
        }

        self.topics()
            .flat_map(|t| t.overlay.sections.iter())
            .flat_map(|s| s.resources.iter())
            .try_for_each(ResourceLink::validate)
    }
}

static EMPTY_TAB: Tab = Tab {
    id: String::new(),
    label: String::new(),
    icon: String::new(),
    intro: None,
    topics: Vec::new(),
};
