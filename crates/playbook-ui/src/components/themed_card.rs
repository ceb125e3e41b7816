//! Theme-aware card surface

use leptos::prelude::*;

use crate::state::use_theme;

/// Wraps children in the surface of the current theme.
#[component]
pub fn ThemedCard(
    /// Extra classes appended after the theme surface
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let classes = move || format!("p-6 {} {class}", theme.get().card_class());

    view! { <div class=classes>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_card_component_exists() {
        let _component = ThemedCard;
    }
}
