//! JSON Repository
//!
//! Stores the feedback list and vote map as JSON strings under the
//! configured keys of any `KeyValueBackend`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StorageKeys;
use crate::domain::{DomainResult, FeedbackItem, VoteMap};
use super::traits::{FeedbackRepository, KeyValueBackend};

pub struct JsonRepository<B> {
    backend: B,
    keys: StorageKeys,
}

impl<B: KeyValueBackend> JsonRepository<B> {
    pub fn new(backend: B, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    /// Read and decode `key`, falling back to `T::default()` on any failure
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored value under '{}', starting empty", key);
                return T::default();
            }
            Err(e) => {
                log::warn!("Reading '{}' failed, starting empty: {}", key, e);
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored '{}' is not valid, starting empty: {}", key, e);
                T::default()
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }
}

impl<B: KeyValueBackend> FeedbackRepository for JsonRepository<B> {
    fn load_feedback(&self) -> Vec<FeedbackItem> {
        self.load_or_default(&self.keys.feedback)
    }

    fn save_feedback(&self, items: &[FeedbackItem]) -> DomainResult<()> {
        self.save(&self.keys.feedback, items)
    }

    fn load_votes(&self) -> VoteMap {
        self.load_or_default(&self.keys.votes)
    }

    fn save_votes(&self, votes: &VoteMap) -> DomainResult<()> {
        self.save(&self.keys.votes, votes)
    }
}
