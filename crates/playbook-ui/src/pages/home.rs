//! Home page: the playbook index, or the configured landing playbook

use leptos::prelude::*;
use leptos_router::components::A;
use playbook_core::{Catalog, Page};

use crate::components::ThemedCard;
use crate::pages::PlaybookPage;
use crate::router::routes;
use crate::state::{use_config, use_theme};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let config = use_config();
    match config.landing_page {
        Some(slug) => view! { <PlaybookPage slug=slug /> }.into_any(),
        None => view! { <PlaybookIndex site_title=config.site_title /> }.into_any(),
    }
}

#[component]
fn PlaybookIndex(site_title: String) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="mx-auto max-w-6xl px-4 py-12" data-testid="playbook-index">
            <h1 class="mb-3 text-5xl font-bold">{site_title}</h1>
            <p class=move || format!("mb-10 text-lg {}", theme.get().muted_text_class())>
                "Step-by-step guides for starting an online business."
            </p>
            <div class="grid gap-6 md:grid-cols-2">
                {Catalog::builtin()
                    .pages()
                    .iter()
                    .map(|page| view! { <PlaybookLink page=page /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PlaybookLink(page: &'static Page) -> impl IntoView {
    let theme = use_theme();
    let href = routes::for_slug(&page.slug).unwrap_or(routes::HOME);
    let summary = format!("{} tabs · {} guides", page.tabs.len(), page.topics().count());

    view! {
        <A href=href attr:class="block transition-transform hover:-translate-y-1">
            <ThemedCard class="h-full">
                <h2 class="mb-2 text-2xl font-semibold">{page.title.clone()}</h2>
                <p class=move || format!("mb-4 {}", theme.get().muted_text_class())>
                    {page.tagline.clone()}
                </p>
                <span class="text-sm text-sky-300">{summary}</span>
            </ThemedCard>
        </A>
    }
}
