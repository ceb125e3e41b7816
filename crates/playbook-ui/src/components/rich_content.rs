//! Rendering for catalog content blocks

use leptos::prelude::*;
use playbook_core::{ColorBundle, ContentBlock};

/// Render one block using the section's colour bundle.
pub fn render_block(block: &ContentBlock, bundle: &'static ColorBundle) -> AnyView {
    match block {
        ContentBlock::Paragraph(text) => {
            view! { <p class=format!("mb-3 leading-relaxed {}", bundle.body)>{text.clone()}</p> }
                .into_any()
        }
        ContentBlock::Subheading(text) => view! {
            <h4 class=format!("mt-4 mb-2 font-semibold {}", bundle.heading)>{text.clone()}</h4>
        }
        .into_any(),
        ContentBlock::Bullets(items) => {
            let items = items
                .iter()
                .map(|item| view! { <li>{item.clone()}</li> })
                .collect_view();
            view! { <ul class=format!("mb-3 list-disc space-y-1 pl-5 {}", bundle.body)>{items}</ul> }
                .into_any()
        }
        ContentBlock::Steps(items) => {
            let items = items
                .iter()
                .map(|item| view! { <li>{item.clone()}</li> })
                .collect_view();
            view! {
                <ol class=format!("mb-3 list-decimal space-y-1 pl-5 {}", bundle.body)>{items}</ol>
            }
            .into_any()
        }
        ContentBlock::Tip { label, text } => view! {
            <div class=format!("mb-3 rounded-lg border p-3 {} {}", bundle.border, bundle.icon)>
                <span class=format!("font-semibold {}", bundle.accent)>{format!("{label}: ")}</span>
                <span class=bundle.body>{text.clone()}</span>
            </div>
        }
        .into_any(),
    }
}

/// Render a list of blocks in order.
#[component]
pub fn RichContent(blocks: Vec<ContentBlock>, bundle: &'static ColorBundle) -> impl IntoView {
    blocks
        .iter()
        .map(|block| render_block(block, bundle))
        .collect_view()
}
