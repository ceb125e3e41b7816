//! Router configuration for the playbook UI
//!
//! Every playbook lives at `"/" + slug`.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};
use playbook_core::slugs;

use crate::error::{Result, UiError};
use crate::pages::{AiInfluencer, AutomationAgency, ClothingBrand, Copywriting, Home, NotFound};
use crate::state::{use_config, use_theme_context};

/// Route definitions as constants for type safety
pub mod routes {
    use super::{Result, UiError, slugs};

    pub const HOME: &str = "/";
    pub const AI_INFLUENCER: &str = "/ai-influencer";
    pub const AUTOMATION_AGENCY: &str = "/automation-agency";
    pub const CLOTHING_BRAND: &str = "/clothing-brand";
    pub const COPYWRITING: &str = "/copywriting";

    /// Route path for a catalog slug.
    ///
    /// # Errors
    /// Returns `UiError::RouteNotFound` for a slug with no route.
    pub fn for_slug(slug: &str) -> Result<&'static str> {
        match slug {
            slugs::AI_INFLUENCER => Ok(AI_INFLUENCER),
            slugs::AUTOMATION_AGENCY => Ok(AUTOMATION_AGENCY),
            slugs::CLOTHING_BRAND => Ok(CLOTHING_BRAND),
            slugs::COPYWRITING => Ok(COPYWRITING),
            other => Err(UiError::RouteNotFound(format!("/{other}"))),
        }
    }
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <SiteHeader />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=StaticSegment(slugs::AI_INFLUENCER) view=AiInfluencer />
                    <Route path=StaticSegment(slugs::AUTOMATION_AGENCY) view=AutomationAgency />
                    <Route path=StaticSegment(slugs::CLOTHING_BRAND) view=ClothingBrand />
                    <Route path=StaticSegment(slugs::COPYWRITING) view=Copywriting />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let config = use_config();
    let link = "rounded-md px-3 py-1 text-sm text-white/70 hover:bg-white/10 hover:text-white";

    view! {
        <header class="border-b border-white/10">
            <nav class="mx-auto flex max-w-6xl flex-wrap items-center gap-2 px-4 py-3">
                <A href=routes::HOME attr:class="mr-4 font-semibold">
                    {config.site_title}
                </A>
                <A href=routes::AI_INFLUENCER attr:class=link>"AI Influencer"</A>
                <A href=routes::AUTOMATION_AGENCY attr:class=link>"Automation Agency"</A>
                <A href=routes::CLOTHING_BRAND attr:class=link>"Clothing Brand"</A>
                <A href=routes::COPYWRITING attr:class=link>"Copywriting"</A>
                <ThemeToggle />
            </nav>
        </header>
    }
}

/// Switches between the gradient and standard themes.
#[component]
fn ThemeToggle() -> impl IntoView {
    use_theme_context().map(|ctx| {
        let theme = ctx.theme();
        view! {
            <button
                type="button"
                class="ml-auto rounded-md border border-white/20 px-3 py-1 text-sm hover:bg-white/10"
                data-testid="theme-toggle"
                on:click=move |_| ctx.toggle()
            >
                {move || format!("Theme: {}", theme.get())}
            </button>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::AI_INFLUENCER, "/ai-influencer");
        assert_eq!(routes::AUTOMATION_AGENCY, "/automation-agency");
        assert_eq!(routes::CLOTHING_BRAND, "/clothing-brand");
        assert_eq!(routes::COPYWRITING, "/copywriting");
    }

    #[test]
    fn test_route_is_slash_plus_slug() {
        for slug in slugs::ALL {
            assert_eq!(routes::for_slug(slug).map(str::to_string), Ok(format!("/{slug}")));
        }
    }

    #[test]
    fn test_unknown_slug_has_no_route() {
        assert_eq!(
            routes::for_slug("dropshipping"),
            Err(UiError::RouteNotFound("/dropshipping".to_string()))
        );
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }
}
