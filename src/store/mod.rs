use crate::error::{LearnbaseError, Result};
use crate::id::IdStrategy;
use crate::model::{
    Content, ContentPatch, NewContent, NewQuestion, NewReply, NewSection, Question,
    QuestionStatus, Reply, Role, Section, SectionPatch, User,
};
use crate::seed::SeedData;
use chrono::Utc;

/// Store construction options.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
}

/// The main entry point. Owns the five entity collections and the current
/// session pointer, and provides all CRUD and query operations.
///
/// Everything is held in process memory: queries are linear scans and
/// mutations are direct `Vec` edits, which is fine at seed-data scale. The
/// store takes no position on concurrency — it is a plain owned value, and
/// an embedding service that shares it across threads must supply its own
/// locking.
pub struct Store {
    config: StoreConfig,
    users: Vec<User>,
    sections: Vec<Section>,
    contents: Vec<Content>,
    questions: Vec<Question>,
    replies: Vec<Reply>,
    /// Id of the currently logged-in user, if any.
    current_user: Option<String>,
}

fn not_found(collection: &str, id: &str) -> LearnbaseError {
    LearnbaseError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Store {
            config,
            users: Vec::new(),
            sections: Vec::new(),
            contents: Vec::new(),
            questions: Vec::new(),
            replies: Vec::new(),
            current_user: None,
        }
    }

    /// Create a store pre-populated from seed data. Seeded records keep
    /// their caller-chosen ids and are thereafter indistinguishable from
    /// runtime-created ones.
    pub fn with_seed(seed: SeedData) -> Self {
        Self::with_seed_and_config(seed, StoreConfig::default())
    }

    pub fn with_seed_and_config(seed: SeedData, config: StoreConfig) -> Self {
        let mut store = Self::with_config(config);
        let now = Utc::now();

        for user in seed.users {
            store.users.push(User {
                id: user.id,
                username: user.username,
                email: user.email,
                password: user.password,
                role: user.role,
                avatar: user.avatar,
                created_at: now,
            });
        }
        for section in seed.sections {
            store.sections.push(Section {
                id: section.id,
                title: section.title,
                description: section.description,
                icon: section.icon,
                order: section.order,
                parent_id: section.parent_id,
                created_at: now,
                updated_at: now,
            });
        }
        for content in seed.contents {
            store.contents.push(Content {
                id: content.id,
                section_id: content.section_id,
                title: content.title,
                summary: content.summary,
                body: content.body,
                tags: content.tags,
                order: content.order,
                view_count: 0,
                created_at: now,
                updated_at: now,
            });
        }

        log::debug!(
            "seeded store: {} users, {} sections, {} contents",
            store.users.len(),
            store.sections.len(),
            store.contents.len()
        );
        store
    }

    fn next_id(&self, prefix: &str) -> String {
        self.config.id_strategy.generate(prefix)
    }

    // ── Session / identity ─────────────────────────────────────

    /// Register a new user with role `user`. Fails if the email is already
    /// taken; uniqueness is checked only here, at registration time. Does
    /// not log the user in.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<User> {
        if self.users.iter().any(|u| u.email == email) {
            log::debug!("registration rejected, email already taken: {email}");
            return Err(LearnbaseError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User {
            id: self.next_id("user"),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::User,
            avatar: None,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Log in with an exact email/password match. On success the user
    /// becomes the current session; on failure the session is left
    /// unchanged. Unknown email and wrong password are indistinguishable.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(LearnbaseError::InvalidCredentials)?
            .clone();
        self.current_user = Some(user.id.clone());
        Ok(user)
    }

    /// Clear the current session. Idempotent.
    pub fn logout(&mut self) {
        self.current_user = None;
    }

    /// The currently logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        let id = self.current_user.as_deref()?;
        self.get_user(id)
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Whether the given user currently holds the admin role. The store
    /// itself never gates mutations on this; it exists so callers can make
    /// their capability check explicit.
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.get_user(user_id)
            .map(|u| u.role == Role::Admin)
            .unwrap_or(false)
    }

    // ── Sections ───────────────────────────────────────────────

    /// Top-level sections (no parent), ascending by display order. Ties keep
    /// insertion order.
    pub fn sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self
            .sections
            .iter()
            .filter(|s| s.parent_id.is_none())
            .collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Sections nested under the given parent, ascending by display order.
    pub fn sub_sections(&self, parent_id: &str) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self
            .sections
            .iter()
            .filter(|s| s.parent_id.as_deref() == Some(parent_id))
            .collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Append a new section. `parent_id` existence is not validated and
    /// duplicate titles are allowed.
    pub fn add_section(&mut self, new: NewSection) -> Section {
        let now = Utc::now();
        let section = Section {
            id: self.next_id("section"),
            title: new.title,
            description: new.description,
            icon: new.icon,
            order: new.order,
            parent_id: new.parent_id,
            created_at: now,
            updated_at: now,
        };
        self.sections.push(section.clone());
        section
    }

    /// Merge the patch into an existing section and refresh its update
    /// timestamp. No partial mutation happens when the id is missing.
    pub fn update_section(&mut self, id: &str, patch: SectionPatch) -> Result<Section> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("sections", id))?;

        if let Some(title) = patch.title {
            section.title = title;
        }
        if let Some(description) = patch.description {
            section.description = description;
        }
        if let Some(icon) = patch.icon {
            section.icon = icon;
        }
        if let Some(order) = patch.order {
            section.order = order;
        }
        if let Some(parent_id) = patch.parent_id {
            section.parent_id = Some(parent_id);
        }
        section.updated_at = Utc::now();
        Ok(section.clone())
    }

    /// Delete a section, cascading one level: direct child sections and the
    /// contents of the deleted section itself are removed. Grandchild
    /// sections survive, as do the contents of removed children — a known
    /// gap in the cascade, preserved deliberately.
    pub fn delete_section(&mut self, id: &str) -> Result<()> {
        let index = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found("sections", id))?;
        self.sections.remove(index);

        let before_sections = self.sections.len();
        self.sections.retain(|s| s.parent_id.as_deref() != Some(id));
        let before_contents = self.contents.len();
        self.contents.retain(|c| c.section_id != id);

        log::debug!(
            "deleted section {id}: {} child sections, {} contents removed",
            before_sections - self.sections.len(),
            before_contents - self.contents.len()
        );
        Ok(())
    }

    // ── Contents ───────────────────────────────────────────────

    /// Contents of one section when a filter is given, otherwise all
    /// contents. Ascending by display order in either case; without a filter
    /// this compares section-local order values across sections, which is
    /// how the platform has always behaved.
    pub fn contents(&self, section_id: Option<&str>) -> Vec<&Content> {
        let mut contents: Vec<&Content> = match section_id {
            Some(section_id) => self
                .contents
                .iter()
                .filter(|c| c.section_id == section_id)
                .collect(),
            None => self.contents.iter().collect(),
        };
        contents.sort_by_key(|c| c.order);
        contents
    }

    pub fn get_content(&self, id: &str) -> Option<&Content> {
        self.contents.iter().find(|c| c.id == id)
    }

    /// Append a new content with a zero view count.
    pub fn add_content(&mut self, new: NewContent) -> Content {
        let now = Utc::now();
        let content = Content {
            id: self.next_id("content"),
            section_id: new.section_id,
            title: new.title,
            summary: new.summary,
            body: new.body,
            tags: new.tags,
            order: new.order,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.contents.push(content.clone());
        content
    }

    /// Merge the patch into an existing content and refresh its update
    /// timestamp.
    pub fn update_content(&mut self, id: &str, patch: ContentPatch) -> Result<Content> {
        let content = self
            .contents
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("contents", id))?;

        if let Some(section_id) = patch.section_id {
            content.section_id = section_id;
        }
        if let Some(title) = patch.title {
            content.title = title;
        }
        if let Some(summary) = patch.summary {
            content.summary = summary;
        }
        if let Some(body) = patch.body {
            content.body = body;
        }
        if let Some(tags) = patch.tags {
            content.tags = tags;
        }
        if let Some(order) = patch.order {
            content.order = order;
        }
        content.updated_at = Utc::now();
        Ok(content.clone())
    }

    pub fn delete_content(&mut self, id: &str) -> Result<()> {
        let index = self
            .contents
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found("contents", id))?;
        self.contents.remove(index);
        Ok(())
    }

    /// Count one view. Every call increments — repeated views by the same
    /// reader are not deduplicated. A missing id is a silent no-op.
    pub fn increment_view_count(&mut self, id: &str) {
        if let Some(content) = self.contents.iter_mut().find(|c| c.id == id) {
            content.view_count += 1;
        }
    }

    /// Case-insensitive substring search over title, summary, body and
    /// tags. Results come back in insertion order; there is no ranking.
    pub fn search_contents(&self, query: &str) -> Vec<&Content> {
        let needle = query.to_lowercase();
        self.contents
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.summary.to_lowercase().contains(&needle)
                    || c.body.to_lowercase().contains(&needle)
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    // ── Questions and replies ──────────────────────────────────

    /// All questions, newest first.
    pub fn questions(&self) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self.questions.iter().collect();
        questions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        questions
    }

    pub fn get_question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Append a new question with status `open`.
    pub fn add_question(&mut self, new: NewQuestion) -> Question {
        let now = Utc::now();
        let question = Question {
            id: self.next_id("question"),
            user_id: new.user_id,
            content_id: new.content_id,
            title: new.title,
            body: new.body,
            status: QuestionStatus::Open,
            created_at: now,
            updated_at: now,
        };
        self.questions.push(question.clone());
        question
    }

    /// Replies to one question, oldest first — the opposite order from the
    /// question list.
    pub fn replies(&self, question_id: &str) -> Vec<&Reply> {
        let mut replies: Vec<&Reply> = self
            .replies
            .iter()
            .filter(|r| r.question_id == question_id)
            .collect();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        replies
    }

    /// Append a reply. An admin reply flips the parent question to
    /// `answered` in place, whatever its current status — this is the one
    /// cross-entity mutation in the store. A missing parent question does
    /// not fail the reply; it is appended and the flip is skipped.
    pub fn add_reply(&mut self, new: NewReply) -> Reply {
        let now = Utc::now();
        let reply = Reply {
            id: self.next_id("reply"),
            question_id: new.question_id,
            user_id: new.user_id,
            body: new.body,
            is_admin_reply: new.is_admin_reply,
            created_at: now,
            updated_at: now,
        };
        self.replies.push(reply.clone());

        if reply.is_admin_reply {
            if let Some(question) = self
                .questions
                .iter_mut()
                .find(|q| q.id == reply.question_id)
            {
                question.status = QuestionStatus::Answered;
            }
        }
        reply
    }
}
