//! Creation Dialog State Machine
//!
//! `Closed` or `Open` with the form contents. Form fields live only while
//! the dialog is open, so every open starts blank.

use crate::config::FieldLimits;
use crate::domain::{FeedbackDraft, ValidFeedback};

/// Contents of an open dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogForm {
    pub draft: FeedbackDraft,
    /// Inline validation message from the last rejected submit
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogForm),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open(_))
    }

    pub fn form(&self) -> Option<&DialogForm> {
        match self {
            DialogState::Open(form) => Some(form),
            DialogState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.form().and_then(|form| form.error.as_deref())
    }

    /// Open a blank form. Already open: keep what was typed.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = DialogState::Open(DialogForm::default());
        }
    }

    /// Close and discard the form
    pub fn cancel(&mut self) {
        *self = DialogState::Closed;
    }

    /// Escape dismisses an open dialog like Cancel. Returns true if it closed.
    pub fn dismiss_on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.cancel();
            return true;
        }
        false
    }

    pub fn set_title(&mut self, title: String) {
        if let DialogState::Open(form) = self {
            form.draft.title = title;
        }
    }

    pub fn set_description(&mut self, description: String) {
        if let DialogState::Open(form) = self {
            form.draft.description = description;
        }
    }

    /// Validate the form. On success the dialog closes and the trimmed
    /// input is returned; on failure it stays open with the error set.
    pub fn submit(&mut self, limits: &FieldLimits) -> Option<ValidFeedback> {
        let DialogState::Open(form) = self else {
            return None;
        };

        match form.draft.validate(limits) {
            Ok(valid) => {
                *self = DialogState::Closed;
                Some(valid)
            }
            Err(e) => {
                log::debug!("Rejected feedback submission: {}", e);
                form.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(title: &str, description: &str) -> DialogState {
        let mut dialog = DialogState::default();
        dialog.open();
        dialog.set_title(title.to_string());
        dialog.set_description(description.to_string());
        dialog
    }

    #[test]
    fn test_starts_closed() {
        let dialog = DialogState::default();
        assert!(!dialog.is_open());
        assert!(dialog.form().is_none());
    }

    #[test]
    fn test_valid_submit_emits_trimmed_and_closes() {
        let mut dialog = open_with("  Dark mode  ", "  at night ");
        let valid = dialog.submit(&FieldLimits::default()).unwrap();

        assert_eq!(valid.title(), "Dark mode");
        assert_eq!(valid.description(), "at night");
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_blank_title_keeps_dialog_open_with_error() {
        let mut dialog = open_with("   ", "details");
        assert!(dialog.submit(&FieldLimits::default()).is_none());

        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Title is required."));
        assert_eq!(dialog.form().unwrap().draft.description, "details");
    }

    #[test]
    fn test_error_cleared_by_successful_resubmit_and_reopen() {
        let mut dialog = open_with("", "");
        dialog.submit(&FieldLimits::default());
        dialog.set_title("Fixed".to_string());
        assert!(dialog.submit(&FieldLimits::default()).is_some());

        dialog.open();
        assert_eq!(dialog.form(), Some(&DialogForm::default()));
    }

    #[test]
    fn test_cancel_discards_fields() {
        let mut dialog = open_with("Half typed", "");
        dialog.cancel();
        assert!(!dialog.is_open());

        dialog.open();
        assert!(dialog.form().unwrap().draft.is_blank());
    }

    #[test]
    fn test_escape_cancels_open_dialog() {
        let mut dialog = open_with("Half typed", "notes");
        assert!(!dialog.dismiss_on_key("Enter"));
        assert!(dialog.is_open());

        assert!(dialog.dismiss_on_key("Escape"));
        assert_eq!(dialog, DialogState::Closed);

        dialog.open();
        assert!(dialog.form().unwrap().draft.is_blank());
    }

    #[test]
    fn test_escape_on_closed_dialog_is_ignored() {
        let mut dialog = DialogState::Closed;
        assert!(!dialog.dismiss_on_key("Escape"));
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_open_twice_keeps_contents() {
        let mut dialog = open_with("Keep me", "");
        dialog.open();
        assert_eq!(dialog.form().unwrap().draft.title, "Keep me");
    }

    #[test]
    fn test_closed_dialog_ignores_input_and_submit() {
        let mut dialog = DialogState::Closed;
        dialog.set_title("ignored".to_string());
        assert!(dialog.submit(&FieldLimits::default()).is_none());
        assert_eq!(dialog, DialogState::Closed);
    }
}
