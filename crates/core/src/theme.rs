//! Ambient page theme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Visual theme read by every component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Gradient,
    #[serde(rename = "default")]
    Standard,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Standard => "default",
        }
    }

    /// The other theme; used by the header toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Gradient => Self::Standard,
            Self::Standard => Self::Gradient,
        }
    }

    /// Classes for the page background.
    #[must_use]
    pub const fn page_class(self) -> &'static str {
        match self {
            Self::Gradient => {
                "min-h-screen bg-gradient-to-br from-slate-950 via-purple-950 to-slate-900 text-white"
            }
            Self::Standard => "min-h-screen bg-slate-950 text-white",
        }
    }

    /// Classes for a themed card surface.
    #[must_use]
    pub const fn card_class(self) -> &'static str {
        match self {
            Self::Gradient => {
                "rounded-xl border border-white/10 bg-gradient-to-br from-white/10 to-white/5 backdrop-blur-sm"
            }
            Self::Standard => "rounded-xl border border-slate-700 bg-slate-900",
        }
    }

    /// Classes for secondary text.
    #[must_use]
    pub const fn muted_text_class(self) -> &'static str {
        match self {
            Self::Gradient => "text-purple-200/80",
            Self::Standard => "text-slate-400",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradient" => Ok(Self::Gradient),
            "default" | "standard" => Ok(Self::Standard),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_is_gradient() {
        assert_eq!(Theme::default(), Theme::Gradient);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Gradient, Theme::Standard] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for theme in [Theme::Gradient, Theme::Standard] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(Error::UnknownTheme("neon".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Theme::Standard).unwrap(), "\"default\"");
        assert_eq!(serde_json::to_string(&Theme::Gradient).unwrap(), "\"gradient\"");
    }

    #[test]
    fn test_classes_differ_per_theme() {
        assert_ne!(Theme::Gradient.card_class(), Theme::Standard.card_class());
        assert_ne!(Theme::Gradient.page_class(), Theme::Standard.page_class());
    }
}
