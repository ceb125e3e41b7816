//! 404 Not Found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-xl px-4 py-24 text-center" data-testid="not-found">
            <h1 class="mb-4 text-4xl font-bold">"404 - Page Not Found"</h1>
            <p class="mb-8 text-white/70">"That playbook doesn't exist."</p>
            <A href=routes::HOME attr:class="text-sky-300 hover:underline">
                "Back to all playbooks"
            </A>
        </div>
    }
}
