//! Modal guide overlay
//!
//! A full-viewport dimmed backdrop with a centred, scrollable panel. The
//! overlay owns no open/closed state: the parent passes `is_open` and
//! `on_close` receives the dismissal as an `OverlayEvent`, so the parent's
//! controller decides whether it closes anything. Section bodies are opaque `ViewFn`s, so any content
//! can be shown; `From<&OverlaySection>` covers the catalog case.

use leptos::html::Div;
use leptos::logging::warn;
use leptos::prelude::*;
use playbook_core::{ColorTag, Key, OverlayEvent, OverlaySection, ResourceLink};

use crate::components::rich_content::RichContent;

const BACKDROP_CLASS: &str =
    "fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4 backdrop-blur-sm";
const PANEL_CLASS: &str = "relative max-h-[85vh] w-full max-w-3xl overflow-y-auto overscroll-contain \
     rounded-2xl border border-white/10 bg-slate-900 p-6 text-white shadow-2xl focus:outline-none";

/// One titled block of overlay content
#[derive(Clone)]
pub struct GuideSection {
    pub title: String,
    pub color: ColorTag,
    pub content: ViewFn,
    pub resources: Vec<ResourceLink>,
    pub checklist: Vec<String>,
}

impl GuideSection {
    pub fn new(title: impl Into<String>, color: ColorTag, content: impl Into<ViewFn>) -> Self {
        Self {
            title: title.into(),
            color,
            content: content.into(),
            resources: Vec::new(),
            checklist: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_resources(mut self, resources: Vec<ResourceLink>) -> Self {
        self.resources = resources;
        self
    }

    #[must_use]
    pub fn with_checklist(mut self, checklist: Vec<String>) -> Self {
        self.checklist = checklist;
        self
    }
}

impl From<&OverlaySection> for GuideSection {
    fn from(section: &OverlaySection) -> Self {
        let blocks = section.content.clone();
        let bundle = section.color.bundle();
        Self::new(section.title.clone(), section.color, move || {
            view! { <RichContent blocks=blocks.clone() bundle=bundle /> }
        })
        .with_resources(section.resources.clone())
        .with_checklist(section.checklist.clone())
    }
}

/// Modal overlay with a close button, backdrop dismissal, and optional
/// Escape handling.
///
/// `on_close` gets `CloseButton`, `BackdropClicked` or `EscapePressed`.
/// Escape is only reported while `close_on_escape` is set.
#[component]
pub fn GuideOverlay(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<(OverlayEvent,)>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    sections: Vec<GuideSection>,
    #[prop(default = true)] close_on_escape: bool,
) -> impl IntoView {
    let panel_ref = NodeRef::<Div>::new();

    // The panel only exists while open, so this runs once per mount.
    Effect::new(move |_| {
        if let Some(panel) = panel_ref.get() {
            if let Err(e) = panel.focus() {
                warn!("overlay panel could not take focus: {e:?}");
            }
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div
                class=BACKDROP_CLASS
                data-testid="guide-overlay-backdrop"
                on:click=move |_| on_close.run((OverlayEvent::BackdropClicked,))
                on:keydown=move |ev| {
                    if close_on_escape && Key::from_key(&ev.key()) == Key::Escape {
                        ev.prevent_default();
                        on_close.run((OverlayEvent::EscapePressed,));
                    }
                }
            >
                <div
                    node_ref=panel_ref
                    class=PANEL_CLASS
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.clone()
                    tabindex="-1"
                    data-testid="guide-overlay-panel"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute right-4 top-4 rounded-full p-2 text-2xl leading-none text-white/70 hover:bg-white/10 hover:text-white"
                        aria-label="Close"
                        data-testid="guide-overlay-close"
                        on:click=move |_| on_close.run((OverlayEvent::CloseButton,))
                    >
                        "×"
                    </button>
                    <h2 class="mb-2 pr-10 text-2xl font-bold">{title.clone()}</h2>
                    {move || {
                        description
                            .get()
                            .map(|text| view! { <p class="mb-6 text-white/70">{text}</p> })
                    }}
                    <div class="space-y-6">
                        {sections
                            .iter()
                            .map(|section| view! { <GuideSectionView section=section.clone() /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn GuideSectionView(section: GuideSection) -> impl IntoView {
    let bundle = section.color.bundle();
    let resources = (!section.resources.is_empty())
        .then(|| view! { <ResourceList resources=section.resources.clone() /> });
    let checklist = (!section.checklist.is_empty())
        .then(|| view! { <Checklist items=section.checklist.clone() /> });

    view! {
        <section class=format!("rounded-xl border p-5 {}", bundle.container_class())>
            <h3 class=format!("mb-3 text-lg font-semibold {}", bundle.heading)>{section.title}</h3>
            {section.content.run()}
            {resources}
            {checklist}
        </section>
    }
}

/// External links; each opens in a new tab without an opener reference.
#[component]
fn ResourceList(resources: Vec<ResourceLink>) -> impl IntoView {
    view! {
        <div class="mt-4">
            <h4 class="mb-2 text-sm font-semibold uppercase tracking-wide text-white/60">
                "Resources"
            </h4>
            <ul class="space-y-1">
                {resources
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sky-300 underline-offset-2 hover:underline"
                                >
                                    {link.title}
                                    <span aria-hidden="true" class="ml-1">"↗"</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Read-only checklist; the marks are decoration, not inputs.
#[component]
fn Checklist(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="mt-4 space-y-1">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex gap-2">
                            <span aria-hidden="true" class="text-emerald-400">"✓"</span>
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count_test_id, render};
    use playbook_core::{Catalog, ContentBlock, slugs};

    fn launch_section() -> OverlaySection {
        OverlaySection::new("Launch week", ColorTag::Green)
            .with_block(ContentBlock::paragraph("Post every day for the first week."))
            .with_resource("Google Trends", "https://trends.google.com")
            .with_checklist(["Schedule seven posts", "Reply to every comment"])
    }

    fn render_overlay(open: bool, sections: Vec<GuideSection>) -> String {
        render(move || {
            view! {
                <GuideOverlay
                    is_open=Signal::stored(open)
                    on_close=move |_event: OverlayEvent| {}
                    title="Launch Guide"
                    description="What to do in the first week.".to_string()
                    sections=sections
                />
            }
        })
    }

    #[test]
    fn test_closed_overlay_renders_nothing() {
        let html = render_overlay(false, vec![GuideSection::from(&launch_section())]);
        assert_eq!(count_test_id(&html, "guide-overlay-backdrop"), 0);
        assert!(!html.contains("Launch Guide"));
    }

    #[test]
    fn test_open_overlay_renders_dialog_and_close_control() {
        let html = render_overlay(true, Vec::new());
        assert_eq!(count_test_id(&html, "guide-overlay-backdrop"), 1);
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-modal="true""#));
        assert!(html.contains(r#"aria-label="Close""#));
        assert!(html.contains("What to do in the first week."));
    }

    #[test]
    fn test_resources_open_in_new_tab_with_marker() {
        let html = render_overlay(true, vec![GuideSection::from(&launch_section())]);
        assert!(html.contains(r#"href="https://trends.google.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("Google Trends"));
        assert!(html.contains("↗"));
    }

    #[test]
    fn test_checklist_is_static_marks_without_inputs() {
        let html = render_overlay(true, vec![GuideSection::from(&launch_section())]);
        assert!(html.contains("Schedule seven posts"));
        assert!(html.contains("Reply to every comment"));
        assert_eq!(html.matches("✓").count(), 2);
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_section_content_renders_rich_blocks() {
        let html = render_overlay(true, vec![GuideSection::from(&launch_section())]);
        assert!(html.contains("Launch week"));
        assert!(html.contains("Post every day for the first week."));
    }

    #[test]
    fn test_section_without_extras_has_no_lists() {
        let html = render_overlay(
            true,
            vec![GuideSection::new("Overview", ColorTag::Blue, || "Pick one audience.")],
        );
        assert!(html.contains("Pick one audience."));
        assert!(!html.contains("Resources"));
        assert!(!html.contains("✓"));
    }

    #[test]
    fn test_guide_overlay_component_exists() {
        let _component = GuideOverlay;
    }

    #[test]
    fn test_section_from_catalog_keeps_links_and_checklist() {
        let section = Catalog::builtin()
            .page(slugs::AI_INFLUENCER)
            .ok()
            .and_then(|page| page.topic("niche-research"))
            .and_then(|topic| topic.overlay.sections.iter().find(|s| s.has_resources()));

        assert!(section.is_some());
        if let Some(section) = section {
            let guide = GuideSection::from(section);
            assert_eq!(guide.title, section.title);
            assert_eq!(guide.color, section.color);
            assert_eq!(guide.resources, section.resources);
            assert_eq!(guide.checklist, section.checklist);
        }
    }

    #[test]
    fn test_section_builders() {
        let section = GuideSection::new("Plan", ColorTag::Green, || "body")
            .with_checklist(vec!["one".to_string()]);
        assert!(section.resources.is_empty());
        assert_eq!(section.checklist.len(), 1);
    }
}
