//! Keyboard-accessible clickable container

use leptos::prelude::*;
use playbook_core::activates_card;

pub(crate) const DEFAULT_CLASS: &str = "cursor-pointer rounded-xl p-5 transition-transform hover:-translate-y-0.5 \
     focus:outline-none focus-visible:ring-2 focus-visible:ring-white/60";

/// Card that behaves like a button for pointer and keyboard users.
///
/// Fires `on_click` once per click and once per non-repeat Enter or Space
/// keydown. The element is a `div` with `role="button"`, so the browser never
/// synthesizes a second click from the same key press.
#[component]
pub fn ClickableCard(
    #[prop(into)] on_click: Callback<()>,
    /// Replaces the default container classes
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| DEFAULT_CLASS.to_string());

    view! {
        <div
            class=class
            role="button"
            tabindex="0"
            data-testid="clickable-card"
            on:click=move |_| on_click.run(())
            on:keydown=move |ev| {
                if activates_card(&ev.key(), ev.repeat()) {
                    // Space would otherwise scroll the page
                    ev.prevent_default();
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn test_clickable_card_component_exists() {
        let _component = ClickableCard;
    }

    #[test]
    fn test_card_renders_as_focusable_button() {
        let html = render(|| view! { <ClickableCard on_click=|| {}>"Offer Design"</ClickableCard> });
        assert!(html.contains(r#"role="button""#));
        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains("Offer Design"));
        assert!(html.contains("cursor-pointer"));
    }

    #[test]
    fn test_default_class_is_focusable() {
        assert!(DEFAULT_CLASS.contains("focus-visible:ring-2"));
        assert!(DEFAULT_CLASS.contains("cursor-pointer"));
    }
}
