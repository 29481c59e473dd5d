//! Vote Map
//!
//! Which items this browser has upvoted. Stored as a JSON object of id -> bool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::feedback::FeedbackId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteMap(BTreeMap<FeedbackId, bool>);

impl VoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing entries count as not voted
    pub fn has_voted(&self, id: &FeedbackId) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn mark_voted(&mut self, id: FeedbackId) {
        self.0.insert(id, true);
    }

    /// Flip the flag for `id` and return the previous value
    pub fn toggle(&mut self, id: &FeedbackId) -> bool {
        let entry = self.0.entry(id.clone()).or_insert(false);
        let was_voted = *entry;
        *entry = !was_voted;
        was_voted
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
