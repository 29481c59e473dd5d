//! Upvote Button Component
//!
//! Toggle showing the current count. Clicking again undoes the vote.

use feedback_core::FeedbackId;
use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn UpvoteButton(id: FeedbackId) -> impl IntoView {
    let ctx = use_board();

    let voted = {
        let id = id.clone();
        move || ctx.is_voted(&id)
    };
    let count = {
        let id = id.clone();
        move || ctx.vote_count(&id)
    };
    let on_click = move |_| ctx.toggle_upvote(&id);

    let button_class = {
        let voted = voted.clone();
        move || if voted() { "upvote-btn voted" } else { "upvote-btn" }
    };
    let icon_class = {
        let voted = voted.clone();
        move || if voted() { "upvote-icon bounce" } else { "upvote-icon" }
    };

    view! {
        <button
            class=button_class
            aria-label="Upvote"
            aria-pressed=move || voted().to_string()
            on:click=on_click
        >
            <span class=icon_class aria-hidden="true">"👍"</span>
            <span class="upvote-count">{count}</span>
        </button>
    }
}
