//! Color tag to style bundle mapping
//!
//! Every section and topic card carries one of six color tags. A tag maps to a
//! fixed bundle of utility classes, written out in full so the stylesheet
//! generator can see every class statically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::LookupPolicy;
use crate::error::Error;
use crate::result::Result;

/// Color tag for a topic card or overlay section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Red,
}

impl ColorTag {
    /// All declared tags, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Red,
    ];

    /// Lowercase name used in content files and class lookups
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Map a tag to its style bundle.
    ///
    /// Pure and total: every tag resolves, the match is exhaustive.
    #[must_use]
    pub const fn bundle(self) -> &'static ColorBundle {
        match self {
            Self::Blue => &BLUE,
            Self::Green => &GREEN,
            Self::Yellow => &YELLOW,
            Self::Purple => &PURPLE,
            Self::Orange => &ORANGE,
            Self::Red => &RED,
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColorTag(s.to_string()))
    }
}

/// Style roles for one color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBundle {
    /// Section / card background
    pub surface: &'static str,
    /// Border color
    pub border: &'static str,
    /// Heading text
    pub heading: &'static str,
    /// Body text
    pub body: &'static str,
    /// Check marks and link indicators
    pub accent: &'static str,
    /// Icon badge background
    pub icon: &'static str,
}

impl ColorBundle {
    /// Gray bundle used when a tag name cannot be resolved.
    pub const NEUTRAL: Self = Self {
        surface: "bg-gray-500/10",
        border: "border-gray-500/30",
        heading: "text-gray-200",
        body: "text-gray-300",
        accent: "text-gray-400",
        icon: "bg-gray-500/20",
    };

    /// True when every role carries a class.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.roles().iter().all(|role| !role.trim().is_empty())
    }

    /// Roles in a fixed order: surface, border, heading, body, accent, icon.
    #[must_use]
    pub const fn roles(&self) -> [&'static str; 6] {
        [
            self.surface,
            self.border,
            self.heading,
            self.body,
            self.accent,
            self.icon,
        ]
    }

    /// Container classes (surface and border) joined for a `class` attribute.
    #[must_use]
    pub fn container_class(&self) -> String {
        format!("{} {}", self.surface, self.border)
    }
}

const BLUE: ColorBundle = ColorBundle {
    surface: "bg-blue-500/10",
    border: "border-blue-500/30",
    heading: "text-blue-300",
    body: "text-blue-100",
    accent: "text-blue-400",
    icon: "bg-blue-500/20",
};

const GREEN: ColorBundle = ColorBundle {
    surface: "bg-green-500/10",
    border: "border-green-500/30",
    heading: "text-green-300",
    body: "text-green-100",
    accent: "text-green-400",
    icon: "bg-green-500/20",
};

const YELLOW: ColorBundle = ColorBundle {
    surface: "bg-yellow-500/10",
    border: "border-yellow-500/30",
    heading: "text-yellow-300",
    body: "text-yellow-100",
    accent: "text-yellow-400",
    icon: "bg-yellow-500/20",
};

const PURPLE: ColorBundle = ColorBundle {
    surface: "bg-purple-500/10",
    border: "border-purple-500/30",
    heading: "text-purple-300",
    body: "text-purple-100",
    accent: "text-purple-400",
    icon: "bg-purple-500/20",
};

const ORANGE: ColorBundle = ColorBundle {
    surface: "bg-orange-500/10",
    border: "border-orange-500/30",
    heading: "text-orange-300",
    body: "text-orange-100",
    accent: "text-orange-400",
    icon: "bg-orange-500/20",
};

const RED: ColorBundle = ColorBundle {
    surface: "bg-red-500/10",
    border: "border-red-500/30",
    heading: "text-red-300",
    body: "text-red-100",
    accent: "text-red-400",
    icon: "bg-red-500/20",
};

/// Resolve a bundle from an untyped tag name.
///
/// Under [`LookupPolicy::Strict`] an unknown name is an error; under
/// [`LookupPolicy::Fallback`] it resolves to [`ColorBundle::NEUTRAL`].
///
/// # Errors
/// Returns `Error::UnknownColorTag` for an unknown name under the strict policy.
pub fn resolve_bundle(name: &str, policy: LookupPolicy) -> Result<&'static ColorBundle> {
    match (name.parse::<ColorTag>(), policy) {
        (Ok(tag), _) => Ok(tag.bundle()),
        (Err(e), LookupPolicy::Strict) => Err(e),
        (Err(_), LookupPolicy::Fallback) => {
            tracing::warn!(color = name, "unknown color tag, using neutral bundle");
            Ok(&ColorBundle::NEUTRAL)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_every_tag_has_complete_bundle() {
        for tag in ColorTag::ALL {
            assert!(tag.bundle().is_complete(), "{tag} bundle is incomplete");
        }
    }

    #[test]
    fn test_bundles_are_distinct() {
        for (i, a) in ColorTag::ALL.iter().enumerate() {
            for b in ColorTag::ALL.iter().skip(i + 1) {
                assert_ne!(a.bundle(), b.bundle());
            }
        }
    }

    #[test]
    fn test_bundle_classes_mention_their_color() {
        for tag in ColorTag::ALL {
            for role in tag.bundle().roles() {
                assert!(role.contains(tag.as_str()), "{role} should name {tag}");
            }
        }
    }

    #[test]
    fn test_neutral_is_complete() {
        assert!(ColorBundle::NEUTRAL.is_complete());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Purple".parse::<ColorTag>().unwrap(), ColorTag::Purple);
        assert_eq!(" red ".parse::<ColorTag>().unwrap(), ColorTag::Red);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "teal".parse::<ColorTag>().unwrap_err();
        assert_eq!(err, Error::UnknownColorTag("teal".to_string()));
    }

    #[test]
    fn test_resolve_bundle_strict_rejects_unknown() {
        assert!(resolve_bundle("teal", LookupPolicy::Strict).is_err());
    }

    #[test]
    fn test_resolve_bundle_fallback_is_neutral() {
        let bundle = resolve_bundle("teal", LookupPolicy::Fallback).unwrap();
        assert_eq!(*bundle, ColorBundle::NEUTRAL);
    }

    #[test]
    fn test_resolve_bundle_known_ignores_policy() {
        let strict = resolve_bundle("green", LookupPolicy::Strict).unwrap();
        let fallback = resolve_bundle("green", LookupPolicy::Fallback).unwrap();
        assert_eq!(strict, fallback);
        assert_eq!(strict, ColorTag::Green.bundle());
    }

    #[test]
    fn test_container_class() {
        assert_eq!(
            ColorTag::Blue.bundle().container_class(),
            "bg-blue-500/10 border-blue-500/30"
        );
    }
}
