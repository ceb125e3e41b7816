//! Main application component
//!
//! Loads the embedded config, provides the config and theme contexts, and
//! mounts the router inside a theme-coloured page shell.

use leptos::prelude::*;

use crate::router::AppRouter;
use crate::state::{load_config, provide_config, provide_theme};

/// Main application component with router integration
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let theme = provide_theme(config.theme).theme();
    provide_config(config);

    view! {
        <div class=move || theme.get().page_class() data-testid="app-root">
            <AppRouter />
            <footer class="py-8 text-center text-sm text-white/40">
                "Business playbooks · Leptos 0.7 CSR"
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
