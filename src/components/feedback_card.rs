//! Feedback Card Component

use feedback_core::FeedbackItem;
use leptos::prelude::*;

use crate::components::UpvoteButton;

/// One feedback item: upvote control, title and description.
/// Title and description never change after creation; the vote count is
/// read live by the button.
#[component]
pub fn FeedbackCard(item: FeedbackItem) -> impl IntoView {
    let has_description = item.has_description();

    view! {
        <div class="feedback-card">
            <UpvoteButton id=item.id.clone() />
            <div class="feedback-body">
                <h3 class="feedback-title">{item.title}</h3>
                {has_description.then(|| view! {
                    <p class="feedback-description">{item.description}</p>
                })}
            </div>
        </div>
    }
}
