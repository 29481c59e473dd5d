//! UI Components
//!
//! Leptos components for the feedback board.

mod board_header;
mod feedback_list;
mod feedback_card;
mod upvote_button;
mod empty_state;
mod add_feedback_modal;

pub use board_header::BoardHeader;
pub use feedback_list::FeedbackList;
pub use feedback_card::FeedbackCard;
pub use upvote_button::UpvoteButton;
pub use empty_state::EmptyState;
pub use add_feedback_modal::AddFeedbackModal;
