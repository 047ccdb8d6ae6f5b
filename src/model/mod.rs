// Entity types held by the store, plus the insert/patch input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to a user account. The store never enforces it; callers
/// gate admin operations themselves (see `Store::is_admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A registered user. Passwords are stored as given — this store is a
/// process-local mock, not an account system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The closed set of icon identifiers the presentation layer knows how to
/// render. Kept as a tagged enum rather than an open string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Rocket,
    FileSearch,
    CheckCircle,
    Wrench,
    Bot,
    GitBranch,
    Code,
    Award,
    BookOpen,
}

impl Default for Icon {
    fn default() -> Self {
        Icon::BookOpen
    }
}

/// A named topic grouping of contents, optionally nested one level under a
/// parent section. A `parent_id` pointing at a missing section is permitted;
/// such a section simply never shows up under any parent's sub-section query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    /// Display order among siblings. Caller-assigned; not unique and never
    /// resequenced by the store.
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single article belonging to one section. `section_id` is not checked
/// against live sections on insert; that is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub summary: String,
    /// Markdown source. Rendering is presentation-layer work.
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub order: i64,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of a question. The only implemented transition is to
/// `Answered`, triggered by an admin reply. `Closed` exists in the model but
/// no operation assigns it; flagged for product clarification rather than
/// given an invented close operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Open,
    Answered,
    Closed,
}

/// A question posted by a user, optionally linked to the content it was
/// asked from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    pub title: String,
    pub body: String,
    pub status: QuestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reply attached to one question. `is_admin_reply` is decided by the
/// caller at post time and is never re-derived from the user's current role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub question_id: String,
    pub user_id: String,
    pub body: String,
    pub is_admin_reply: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Insert inputs ──────────────────────────────────────────────

/// Fields for a new section; id and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSection {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub order: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Fields for a new content; id, view count and timestamps are assigned by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContent {
    pub section_id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub order: i64,
}

/// Fields for a new question; status starts at `Open`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub user_id: String,
    #[serde(default)]
    pub content_id: Option<String>,
    pub title: String,
    pub body: String,
}

/// Fields for a new reply. `is_admin_reply` reflects the author's role at
/// post time, as determined by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReply {
    pub question_id: String,
    pub user_id: String,
    pub body: String,
    pub is_admin_reply: bool,
}

// ── Partial updates ────────────────────────────────────────────

/// Partial update for a section. Only fields that are `Some` are merged into
/// the existing record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Icon>,
    pub order: Option<i64>,
    pub parent_id: Option<String>,
}

/// Partial update for a content. View counts are managed through
/// `Store::increment_view_count`, not through patches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPatch {
    pub section_id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i64>,
}
