//! Empty State Component

use leptos::prelude::*;

/// Placeholder shown while the board has no feedback
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-illustration" aria-hidden="true">"💡"</div>
            <h2>"No feedback yet"</h2>
            <p>"Be the first to share an idea or suggestion!"</p>
        </div>
    }
}
