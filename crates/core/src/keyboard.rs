//! Keyboard activation rules for clickable cards and overlays

/// Classification of a DOM `KeyboardEvent.key` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Classify a `KeyboardEvent.key` string.
    ///
    /// `"Spacebar"` and `"Esc"` are the legacy values some browsers still emit.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Whether a keydown should activate a focused card.
///
/// Auto-repeat events are ignored so a held key activates exactly once.
#[must_use]
pub fn activates_card(key: &str, repeat: bool) -> bool {
    !repeat && Key::from_key(key).is_activation()
}
