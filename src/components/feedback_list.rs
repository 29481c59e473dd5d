//! Feedback List Component
//!
//! Cards sorted by descending vote count, or the empty state.

use leptos::prelude::*;

use crate::components::{EmptyState, FeedbackCard};
use crate::context::use_board;

#[component]
pub fn FeedbackList() -> impl IntoView {
    let ctx = use_board();

    view! {
        <Show
            when=move || !ctx.is_empty()
            fallback=|| view! { <EmptyState /> }
        >
            <div class="feedback-list">
                <For
                    each=move || ctx.ranked()
                    key=|item| item.id.clone()
                    children=move |item| view! { <FeedbackCard item=item /> }
                />
            </div>
        </Show>
    }
}
