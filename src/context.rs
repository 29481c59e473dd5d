//! Board Context
//!
//! Shared state provided via Leptos Context API.

use feedback_core::{DialogState, FeedbackBoard, FeedbackId, FeedbackItem, FieldLimits};
use leptos::prelude::*;

use crate::storage::BrowserRepository;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Feedback list and vote map, persisted on every change
    pub board: RwSignal<FeedbackBoard<BrowserRepository>>,
    /// Creation dialog state
    pub dialog: RwSignal<DialogState>,
    pub limits: FieldLimits,
}

impl BoardContext {
    pub fn new(board: FeedbackBoard<BrowserRepository>, limits: FieldLimits) -> Self {
        Self {
            board: RwSignal::new(board),
            dialog: RwSignal::new(DialogState::Closed),
            limits,
        }
    }

    pub fn ranked(&self) -> Vec<FeedbackItem> {
        self.board.with(|b| b.ranked())
    }

    pub fn is_empty(&self) -> bool {
        self.board.with(|b| b.is_empty())
    }

    pub fn vote_count(&self, id: &FeedbackId) -> i64 {
        self.board.with(|b| b.get(id).map(|item| item.votes).unwrap_or_default())
    }

    pub fn is_voted(&self, id: &FeedbackId) -> bool {
        self.board.with(|b| b.is_voted(id))
    }

    pub fn toggle_upvote(&self, id: &FeedbackId) {
        self.board.update(|b| {
            b.toggle_upvote(id);
        });
    }

    pub fn open_dialog(&self) {
        self.dialog.update(|d| d.open());
    }

    pub fn cancel_dialog(&self) {
        self.dialog.update(|d| d.cancel());
    }

    /// Returns true when the key closed the dialog
    pub fn dismiss_dialog_on_key(&self, key: &str) -> bool {
        let mut closed = false;
        self.dialog.update(|d| closed = d.dismiss_on_key(key));
        closed
    }

    /// Validate the open form; on success add the item and close
    pub fn submit_dialog(&self) {
        let limits = self.limits;
        let mut accepted = None;
        self.dialog.update(|d| accepted = d.submit(&limits));

        if let Some(valid) = accepted {
            self.board.update(|b| {
                b.add_feedback(valid);
            });
        }
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
