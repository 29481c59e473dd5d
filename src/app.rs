//! Feedback Board App
//!
//! Header, ranked list and the creation dialog.

use feedback_core::{BoardConfig, FeedbackBoard};
use leptos::prelude::*;

use crate::components::{AddFeedbackModal, BoardHeader, FeedbackList};
use crate::context::BoardContext;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();
    let board = FeedbackBoard::load(storage::open_repository(&config));
    let ctx = BoardContext::new(board, config.limits);

    // Provide context to all children
    provide_context(ctx);

    // Re-sync storage whenever the board changes
    Effect::new(move |_| {
        ctx.board.with(|b| b.sync());
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="app-layout">
            <BoardHeader />

            <main class="main-content">
                <FeedbackList />
            </main>

            <AddFeedbackModal />

            <footer class="app-footer">
                {format!("Made with Rust & Leptos • {}", year)}
            </footer>
        </div>
    }
}
