use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::DatabaseError;
use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("name must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(ClientError::Validation("email must be an address".to_string()));
        }
        if self.phone.trim().is_empty() {
            return Err(ClientError::Validation("phone must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Client {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Could not create client")]
    NotCreated,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => AppError::NotFound(err.to_string()),
            ClientError::Validation(msg) => AppError::ValidationError(msg),
            ClientError::NotCreated => AppError::BadRequest(err.to_string()),
            ClientError::Database(e) => e.into(),
        }
    }
}
