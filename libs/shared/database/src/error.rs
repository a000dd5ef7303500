use thiserror::Error;

use shared_models::error::AppError;

/// PostgreSQL SQLSTATE for unique_violation, echoed by PostgREST in the error body.
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for foreign_key_violation. PostgREST also answers it with HTTP 409.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Referenced row does not exist: {0}")]
    ForeignKey(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DatabaseError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, DatabaseError::Conflict(_))
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self, DatabaseError::ForeignKey(_))
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => AppError::NotFound(msg),
            DatabaseError::Conflict(msg) => AppError::Conflict(msg),
            DatabaseError::ForeignKey(msg) => AppError::BadRequest(msg),
            DatabaseError::Transport(e) => AppError::ExternalService(e.to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}
