// Seed data — the startup records an embedding application hands to the
// store. Parsed from YAML or JSON; the store takes ownership of copies and
// treats seeded records identically to runtime-created ones.

use crate::error::Result;
use crate::model::{Icon, Role};
use serde::{Deserialize, Serialize};

/// A seed user. The original deployment boots with a single admin account,
/// so role defaults to `user` and must be set explicitly for admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A seed section. Ids are caller-chosen, commonly slugs like
/// `getting-started`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
    pub order: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// A seed content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSeed {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub order: i64,
}

/// The full seed set. All collections are optional so a seed file can supply
/// any subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserSeed>,
    #[serde(default)]
    pub sections: Vec<SectionSeed>,
    #[serde(default)]
    pub contents: Vec<ContentSeed>,
}

impl SeedData {
    /// Parse seed data from a YAML string.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let seed: SeedData = serde_yaml::from_str(input)?;
        Ok(seed)
    }

    /// Parse seed data from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(input)?;
        Ok(seed)
    }
}
