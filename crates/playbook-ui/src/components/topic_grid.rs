//! Topic cards for one tab and their guide overlays

use leptos::prelude::*;
use playbook_core::{OverlayEvent, TopicSection};

use crate::components::clickable_card::{ClickableCard, DEFAULT_CLASS};
use crate::components::guide_overlay::{GuideOverlay, GuideSection};
use crate::state::{PageControls, use_theme};

/// Grid of topic cards; each card opens its own overlay.
#[component]
pub fn TopicGrid(topics: &'static [TopicSection], controls: PageControls) -> impl IntoView {
    view! {
        <div class="grid gap-5 md:grid-cols-2 lg:grid-cols-3" data-testid="topic-grid">
            {topics
                .iter()
                .map(|topic| {
                    view! {
                        <TopicCard topic=topic controls=controls />
                        <TopicOverlay topic=topic controls=controls />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TopicCard(topic: &'static TopicSection, controls: PageControls) -> impl IntoView {
    let bundle = topic.color.bundle();
    let theme = use_theme();
    let id = topic.id.as_str();

    view! {
        <ClickableCard
            on_click=move || controls.open_overlay(id)
            class=format!("{DEFAULT_CLASS} border {}", bundle.container_class())
        >
            <div class=format!(
                "mb-3 flex h-12 w-12 items-center justify-center rounded-lg text-2xl {}",
                bundle.icon,
            )>{topic.icon.clone()}</div>
            <h3 class=format!("mb-2 text-lg font-semibold {}", bundle.heading)>
                {topic.title.clone()}
            </h3>
            <p class=move || theme.get().muted_text_class()>{topic.description.clone()}</p>
            <span class=format!("mt-3 inline-block text-sm {}", bundle.accent)>"Open guide →"</span>
        </ClickableCard>
    }
}

/// Overlay bound to one topic id; reopening renders the same content.
///
/// Every dismissal goes to the page controller as-is, which applies the
/// configured Escape policy.
#[component]
fn TopicOverlay(topic: &'static TopicSection, controls: PageControls) -> impl IntoView {
    let sections = topic
        .overlay
        .sections
        .iter()
        .map(GuideSection::from)
        .collect::<Vec<_>>();

    view! {
        <GuideOverlay
            is_open=controls.open_signal(topic.id.as_str())
            on_close=move |event: OverlayEvent| {
                controls.apply(event);
            }
            title=topic.overlay.title.clone()
            description=topic.overlay.description.clone()
            sections=sections
        />
    }
}
