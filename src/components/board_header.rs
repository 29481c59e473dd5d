//! Board Header Component

use leptos::prelude::*;

use crate::context::use_board;

/// Page title and the "Add Feedback" action
#[component]
pub fn BoardHeader() -> impl IntoView {
    let ctx = use_board();

    view! {
        <header class="board-header">
            <h1 class="board-title">"Feedback Board"</h1>
            <button
                class="accent-btn add-feedback-btn"
                on:click=move |_| ctx.open_dialog()
            >
                <span class="plus-icon" aria-hidden="true">"+"</span>
                "Add Feedback"
            </button>
        </header>
    }
}
