//! Repository Layer - Core Traits
//!
//! Two seams: a raw string key-value backend (browser localStorage,
//! in-memory map) and the typed feedback repository built on top of it.

use crate::domain::{DomainResult, FeedbackItem, VoteMap};

/// Synchronous string key-value store
pub trait KeyValueBackend {
    /// Read the raw value under `key`; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value under `key`
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Load/save access to the two persisted board structures
///
/// Loads are tolerant: missing or unreadable data yields an empty default.
/// Saves replace the whole stored value.
pub trait FeedbackRepository {
    fn load_feedback(&self) -> Vec<FeedbackItem>;

    fn save_feedback(&self, items: &[FeedbackItem]) -> DomainResult<()>;

    fn load_votes(&self) -> VoteMap;

    fn save_votes(&self, votes: &VoteMap) -> DomainResult<()>;
}
