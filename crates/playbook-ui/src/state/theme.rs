//! Ambient theme context
//!
//! The app provides one `ThemeContext` at the root. Components read the theme
//! through [`use_theme`] and never write it; only the header toggle does.

use leptos::prelude::*;
use playbook_core::Theme;

/// Session-scoped theme signal
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Read-only view of the current theme
    #[must_use]
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.read_only().into()
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Provide the theme context for the component tree below.
pub fn provide_theme(initial: Theme) -> ThemeContext {
    let ctx = ThemeContext::new(initial);
    provide_context(ctx);
    ctx
}

#[must_use]
pub fn use_theme_context() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

/// Current theme; the default theme when no context was provided.
#[must_use]
pub fn use_theme() -> Signal<Theme> {
    use_theme_context().map_or_else(|| Signal::stored(Theme::default()), |ctx| ctx.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_theme() {
        let ctx = ThemeContext::new(Theme::Gradient);
        ctx.toggle();
        assert_eq!(ctx.theme().get_untracked(), Theme::Standard);
        ctx.toggle();
        assert_eq!(ctx.theme().get_untracked(), Theme::Gradient);
    }

    #[test]
    fn test_use_theme_without_context_is_default() {
        assert_eq!(use_theme().get_untracked(), Theme::default());
    }
}
