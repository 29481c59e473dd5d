//! Feedback Draft
//!
//! Raw dialog input and its validation into a submittable record.

use crate::config::FieldLimits;
use super::error::{DomainError, DomainResult};

pub const TITLE_REQUIRED: &str = "Title is required.";

/// Untrimmed form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub title: String,
    pub description: String,
}

/// Trimmed, validated input ready to become a feedback item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFeedback {
    title: String,
    description: String,
}

impl ValidFeedback {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.description)
    }
}

impl FeedbackDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Trim both fields and check them against `limits`
    pub fn validate(&self, limits: &FieldLimits) -> DomainResult<ValidFeedback> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput(TITLE_REQUIRED.to_string()));
        }
        if title.chars().count() > limits.title_max {
            return Err(DomainError::InvalidInput(format!(
                "Title must be at most {} characters.",
                limits.title_max
            )));
        }

        let description = self.description.trim();
        if description.chars().count() > limits.description_max {
            return Err(DomainError::InvalidInput(format!(
                "Description must be at most {} characters.",
                limits.description_max
            )));
        }

        Ok(ValidFeedback {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> FieldLimits {
        FieldLimits::default()
    }

    #[test]
    fn test_trims_both_fields() {
        let valid = FeedbackDraft::new("  Dark mode ", "\n easier on the eyes  ").validate(&limits()).unwrap();
        assert_eq!(valid.title(), "Dark mode");
        assert_eq!(valid.description(), "easier on the eyes");
    }

    #[test]
    fn test_empty_and_whitespace_titles_rejected() {
        for title in ["", "   ", "\t\n"] {
            let err = FeedbackDraft::new(title, "some text").validate(&limits()).unwrap_err();
            assert_eq!(err, DomainError::InvalidInput(TITLE_REQUIRED.to_string()));
        }
    }

    #[test]
    fn test_description_is_optional() {
        let valid = FeedbackDraft::new("Export to CSV", "   ").validate(&limits()).unwrap();
        assert_eq!(valid.description(), "");
    }

    #[test]
    fn test_length_limits_count_characters() {
        let at_limit = "é".repeat(60);
        assert!(FeedbackDraft::new(at_limit, "").validate(&limits()).is_ok());

        let too_long = "a".repeat(61);
        let err = FeedbackDraft::new(too_long, "").validate(&limits()).unwrap_err();
        assert_eq!(err.to_string(), "Title must be at most 60 characters.");

        let long_desc = "d".repeat(301);
        let err = FeedbackDraft::new("ok", long_desc).validate(&limits()).unwrap_err();
        assert_eq!(err.to_string(), "Description must be at most 300 characters.");
    }
}
