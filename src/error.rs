use thiserror::Error;

#[derive(Error, Debug)]
pub enum LearnbaseError {
    #[error("Record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// Covers both "no such user" and "wrong password" so the response
    /// shape cannot be used to enumerate registered emails.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LearnbaseError>;
