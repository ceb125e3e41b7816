//! Native rendering for unit tests
//!
//! Views are built under a fresh `Owner` and serialised with `to_html`, so
//! props and callbacks are type-checked and the markup can be inspected
//! without a browser. Effects are queued on the local futures pool, which is
//! never polled here, so DOM-only effects stay inert.

use leptos::prelude::*;
use leptos::task::Executor;

/// Render a view to HTML inside its own reactive owner.
pub(crate) fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    // Already-set is fine: tests share one process-wide executor.
    let _ = Executor::init_futures_executor();
    Owner::new().with(|| view().to_html())
}

/// Number of elements carrying `data-testid="{test_id}"`.
pub(crate) fn count_test_id(html: &str, test_id: &str) -> usize {
    html.matches(&format!("data-testid=\"{test_id}\"")).count()
}
