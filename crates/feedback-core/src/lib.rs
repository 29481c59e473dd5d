//! Feedback Board Core
//!
//! Layered architecture:
//! - domain: feedback items, vote map, draft validation
//! - repository: storage port and the JSON adapter over a key-value backend
//! - board: the state controller that owns both structures
//! - dialog: the creation dialog state machine

pub mod config;
pub mod domain;
pub mod repository;
pub mod board;
pub mod dialog;

pub use board::{FeedbackBoard, UpvoteOutcome};
pub use config::{BoardConfig, FieldLimits, StorageKeys};
pub use dialog::{DialogForm, DialogState};
pub use domain::{DomainError, DomainResult, FeedbackDraft, FeedbackId, FeedbackItem, ValidFeedback, VoteMap};
pub use repository::{FeedbackRepository, JsonRepository, KeyValueBackend, MemoryBackend};
