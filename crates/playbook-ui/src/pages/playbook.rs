//! Generic playbook page and the four route components built on it

use leptos::logging::{error, warn};
use leptos::prelude::*;
use playbook_core::{Catalog, Page, ResultExt, Tab, slugs};

use crate::components::{TabSwitcher, ThemedCard, TopicGrid};
use crate::error::{Result, UiError};
use crate::pages::NotFound;
use crate::state::{PageControls, use_config, use_page_controller, use_theme};

/// Look up a catalog page and build its controls.
fn load_page(slug: &str) -> Result<(&'static Page, PageControls)> {
    let page = Catalog::builtin().page(slug).map_err(UiError::from)?;
    let controls = use_page_controller(page, &use_config())?;
    Ok((page, controls))
}

/// Page for one catalog slug; unknown slugs render Not Found.
#[component]
pub fn PlaybookPage(#[prop(into)] slug: String) -> impl IntoView {
    match load_page(&slug) {
        Ok((page, controls)) => view! { <PlaybookView page=page controls=controls /> }.into_any(),
        Err(e) => {
            error!("{e}");
            view! { <NotFound /> }.into_any()
        }
    }
}

#[component]
fn PlaybookView(page: &'static Page, controls: PageControls) -> impl IntoView {
    let theme = use_theme();

    Effect::new(move |_| set_body_scroll_locked(controls.active_overlay().is_some()));
    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        <div class="mx-auto max-w-6xl px-4 py-10" data-testid="playbook-page">
            <header class="mb-8">
                <h1 class="mb-2 text-4xl font-bold">{page.title.clone()}</h1>
                <p class=move || theme.get().muted_text_class()>{page.tagline.clone()}</p>
            </header>
            <TabSwitcher tabs=page.tabs.as_slice() controls=controls />
            <ActiveTabPanel page=page controls=controls />
        </div>
    }
}

/// Only the selected tab's panel is in the tree.
#[component]
fn ActiveTabPanel(page: &'static Page, controls: PageControls) -> impl IntoView {
    move || {
        let id = controls.active_tab();
        let tab = page.tab(&id).or_fallback(page.first_tab());
        view! { <TabPanel tab=tab controls=controls /> }
    }
}

#[component]
fn TabPanel(tab: &'static Tab, controls: PageControls) -> impl IntoView {
    let intro = tab.intro.clone().map(|text| {
        view! {
            <ThemedCard class="mb-6">
                <p class="leading-relaxed">{text}</p>
            </ThemedCard>
        }
    });

    view! {
        <section
            role="tabpanel"
            id=format!("panel-{}", tab.id)
            aria-labelledby=format!("tab-{}", tab.id)
            data-testid="tab-panel"
        >
            {intro}
            <TopicGrid topics=tab.topics.as_slice() controls=controls />
        </section>
    }
}

/// Stop the page behind an open overlay from scrolling.
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        warn!("could not set body overflow: {e:?}");
    }
}

#[component]
pub fn AiInfluencer() -> impl IntoView {
    view! { <PlaybookPage slug=slugs::AI_INFLUENCER /> }
}

#[component]
pub fn AutomationAgency() -> impl IntoView {
    view! { <PlaybookPage slug=slugs::AUTOMATION_AGENCY /> }
}

#[component]
pub fn ClothingBrand() -> impl IntoView {
    view! { <PlaybookPage slug=slugs::CLOTHING_BRAND /> }
}

#[component]
pub fn Copywriting() -> impl IntoView {
    view! { <PlaybookPage slug=slugs::COPYWRITING /> }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::sync::LazyLock;

    use super::*;
    use crate::test_support::{count_test_id, render};
    use playbook_core::{ColorTag, PageController, TopicSection};

    static PAGE: LazyLock<Page> = LazyLock::new(|| {
        Page::new("clothing-brand", "Clothing Brand")
            .with_tab(
                Tab::new("design", "Design")
                    .with_intro("Start from one hero piece.")
                    .with_topic(TopicSection::new("tech-packs", "Tech Packs", ColorTag::Purple)),
            )
            .with_tab(
                Tab::new("launch", "Launch")
                    .with_topic(TopicSection::new("drop-calendar", "Drop Calendar", ColorTag::Red)),
            )
    });

    fn controls() -> PageControls {
        PageControls::new(PageController::for_page(&PAGE).expect("controller should build"))
    }

    fn render_panel(controls: PageControls) -> String {
        let page: &'static Page = &PAGE;
        render(move || view! { <ActiveTabPanel page=page controls=controls /> })
    }

    #[test]
    fn test_only_first_tab_panel_renders_initially() {
        let html = render_panel(controls());
        assert_eq!(count_test_id(&html, "tab-panel"), 1);
        assert!(html.contains(r#"id="panel-design""#));
        assert!(html.contains("Start from one hero piece."));
        assert!(html.contains("Tech Packs"));
        assert!(!html.contains("Drop Calendar"));
    }

    #[test]
    fn test_selected_tab_replaces_panel() {
        let controls = controls();
        controls.select_tab("launch");

        let html = render_panel(controls);
        assert_eq!(count_test_id(&html, "tab-panel"), 1);
        assert!(html.contains(r#"aria-labelledby="tab-launch""#));
        assert!(html.contains("Drop Calendar"));
        assert!(!html.contains("Tech Packs"));
        assert!(!html.contains("Start from one hero piece."));
    }

    #[test]
    fn test_tab_switcher_marks_selected_tab() {
        let controls = controls();
        controls.select_tab("launch");

        let html = render(move || {
            view! { <TabSwitcher tabs=PAGE.tabs.as_slice() controls=controls /> }
        });
        assert!(html.contains(r#"aria-controls="panel-launch" aria-selected="true""#));
        assert!(html.contains(r#"aria-controls="panel-design" aria-selected="false""#));
    }

    #[test]
    fn test_playbook_components_exist() {
        let _page = PlaybookPage;
        let _ai = AiInfluencer;
        let _agency = AutomationAgency;
        let _clothing = ClothingBrand;
        let _copy = Copywriting;
    }

    #[test]
    fn test_load_page_for_every_slug() {
        for slug in slugs::ALL {
            let loaded = load_page(slug);
            assert!(loaded.is_ok(), "{slug} should load");
            if let Ok((page, controls)) = loaded {
                assert_eq!(page.slug, slug);
                assert_eq!(controls.active_tab(), page.first_tab().id);
            }
        }
    }

    #[test]
    fn test_load_page_unknown_slug() {
        let result = load_page("dropshipping");
        assert!(matches!(
            result,
            Err(UiError::Playbook(playbook_core::Error::UnknownPage(_)))
        ));
    }
}
