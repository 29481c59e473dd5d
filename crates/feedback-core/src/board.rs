//! Feedback Board Controller
//!
//! Sole owner of the feedback list and the vote map. Every transition is
//! mirrored to the repository immediately.

use crate::domain::{FeedbackId, FeedbackItem, ValidFeedback, VoteMap};
use crate::repository::FeedbackRepository;

/// Result of a vote toggle on an existing item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpvoteOutcome {
    pub voted: bool,
    pub votes: i64,
}

pub struct FeedbackBoard<R> {
    repo: R,
    items: Vec<FeedbackItem>,
    votes: VoteMap,
}

impl<R: FeedbackRepository> FeedbackBoard<R> {
    /// Seed the board from whatever the repository holds
    pub fn load(repo: R) -> Self {
        let items = repo.load_feedback();
        let votes = repo.load_votes();
        log::info!("Loaded {} feedback items, {} vote entries", items.len(), votes.len());
        Self { repo, items, votes }
    }

    /// Items in stored order (newest first)
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn votes(&self) -> &VoteMap {
        &self.votes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &FeedbackId) -> Option<&FeedbackItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_voted(&self, id: &FeedbackId) -> bool {
        self.votes.has_voted(id)
    }

    /// Copy of the items sorted by descending vote count.
    /// The sort is stable, so ties keep stored order.
    pub fn ranked(&self) -> Vec<FeedbackItem> {
        let mut ranked = self.items.clone();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }

    /// Prepend a new item and count the submitter's vote
    pub fn add_feedback(&mut self, input: ValidFeedback) -> &FeedbackItem {
        let (title, description) = input.into_parts();
        let item = FeedbackItem::new(FeedbackId::generate(), title, description);
        log::info!("Adding feedback {} '{}'", item.id, item.title);

        self.votes.mark_voted(item.id.clone());
        self.items.insert(0, item);
        self.sync();
        &self.items[0]
    }

    /// Flip this browser's vote on `id`. Unknown ids are ignored.
    pub fn toggle_upvote(&mut self, id: &FeedbackId) -> Option<UpvoteOutcome> {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            log::debug!("Ignoring upvote for unknown feedback {}", id);
            return None;
        };

        let was_voted = self.votes.toggle(id);
        if was_voted {
            item.retract_vote();
        } else {
            item.upvote();
        }
        let outcome = UpvoteOutcome {
            voted: !was_voted,
            votes: item.votes,
        };
        log::debug!("Feedback {} now has {} votes (voted={})", id, outcome.votes, outcome.voted);

        self.sync();
        Some(outcome)
    }

    /// Write both structures back to the repository.
    /// Failures are logged; the in-memory state stays authoritative.
    pub fn sync(&self) {
        if let Err(e) = self.repo.save_feedback(&self.items) {
            log::error!("Failed to persist feedback: {}", e);
        }
        if let Err(e) = self.repo.save_votes(&self.votes) {
            log::error!("Failed to persist votes: {}", e);
        }
    }
}
