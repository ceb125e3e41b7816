//! Tab strip for a playbook page

use leptos::prelude::*;
use playbook_core::Tab;

use crate::state::PageControls;

const ACTIVE_CLASS: &str = "rounded-lg bg-white/20 px-4 py-2 font-semibold text-white shadow";
const INACTIVE_CLASS: &str =
    "rounded-lg px-4 py-2 text-white/70 transition-colors hover:bg-white/10 hover:text-white";

/// `role="tablist"` strip; the selected tab carries `aria-selected="true"`.
#[component]
pub fn TabSwitcher(tabs: &'static [Tab], controls: PageControls) -> impl IntoView {
    view! {
        <div role="tablist" class="mb-8 flex flex-wrap gap-2" data-testid="tab-switcher">
            {tabs
                .iter()
                .map(|tab| {
                    let id = tab.id.as_str();
                    let selected = move || controls.is_tab_active(id);
                    view! {
                        <button
                            type="button"
                            role="tab"
                            id=format!("tab-{id}")
                            aria-controls=format!("panel-{id}")
                            aria-selected=move || selected().to_string()
                            class=move || if selected() { ACTIVE_CLASS } else { INACTIVE_CLASS }
                            on:click=move |_| controls.select_tab(id)
                        >
                            {(!tab.icon.is_empty()).then(|| format!("{} ", tab.icon))}
                            {tab.label.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
