// Record id generation.

use serde::{Deserialize, Serialize};

/// Strategy for generating record ids. The default is ULID so that ids stay
/// derived from creation time and sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    Ulid,
    Uuid,
    Nanoid,
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Ulid
    }
}

impl IdStrategy {
    /// Generate a fresh id with a collection prefix, e.g. `section-01hq…`.
    pub fn generate(&self, prefix: &str) -> String {
        let suffix = match self {
            IdStrategy::Ulid => ulid::Ulid::new().to_string().to_lowercase(),
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            IdStrategy::Nanoid => nanoid::nanoid!(),
        };
        format!("{prefix}-{suffix}")
    }
}
