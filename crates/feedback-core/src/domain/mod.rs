//! Domain Layer
//!
//! Feedback entities and the rules around them.
//! No storage or browser dependencies (serde only, for the persisted layout).

mod error;
mod feedback;
mod votes;
mod draft;

pub use error::{DomainError, DomainResult};
pub use feedback::{FeedbackId, FeedbackItem};
pub use votes::VoteMap;
pub use draft::{FeedbackDraft, ValidFeedback};
