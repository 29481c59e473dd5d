//! Board Configuration
//!
//! Storage keys and form limits. There is no environment configuration;
//! everything here is compiled in and can be overridden in tests.

/// Keys under which the two persisted values live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub feedback: String,
    pub votes: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            feedback: "feedback".to_string(),
            votes: "votes".to_string(),
        }
    }
}

/// Maximum field lengths, counted in characters after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub title_max: usize,
    pub description_max: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            title_max: 60,
            description_max: 300,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConfig {
    pub keys: StorageKeys,
    pub limits: FieldLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = BoardConfig::default();
        assert_eq!(config.keys.feedback, "feedback");
        assert_eq!(config.keys.votes, "votes");
        assert_eq!(config.limits.title_max, 60);
        assert_eq!(config.limits.description_max, 300);
    }
}
