//! Feedback Entity
//!
//! A single user-submitted suggestion with its vote count.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque feedback identifier
///
/// New ids are random v4 UUIDs. Ids read back from storage are kept verbatim,
/// whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeedbackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FeedbackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A feedback item as shown on the board and stored under the feedback key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: FeedbackId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub votes: i64,
}

impl FeedbackItem {
    /// Create a freshly submitted item; the submitter's vote is counted
    pub fn new(id: FeedbackId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            votes: 1,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub(crate) fn upvote(&mut self) {
        self.votes += 1;
    }

    /// Remove one vote, never going below zero
    pub(crate) fn retract_vote(&mut self) {
        if self.votes > 0 {
            self.votes -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_with_one_vote() {
        let item = FeedbackItem::new(FeedbackId::from("a1"), "Dark mode".to_string(), String::new());
        assert_eq!(item.votes, 1);
        assert!(!item.has_description());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = FeedbackId::generate();
        let b = FeedbackId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_retract_vote_clamps_at_zero() {
        let mut item = FeedbackItem::new(FeedbackId::from("a1"), "x".to_string(), String::new());
        item.retract_vote();
        item.retract_vote();
        assert_eq!(item.votes, 0);
    }

    #[test]
    fn test_serialized_layout() {
        let item = FeedbackItem::new(FeedbackId::from("k3j9x0a1b"), "Dark mode".to_string(), "Please".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "k3j9x0a1b", "title": "Dark mode", "description": "Please", "votes": 1})
        );
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let item: FeedbackItem = serde_json::from_str(r#"{"id":"x","title":"t","votes":4}"#).unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.votes, 4);
    }
}
