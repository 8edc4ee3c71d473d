use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Invalid product: {}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Validation(_) => ErrorKind::Validation,
            CatalogError::ActorCommunicationError(_) => ErrorKind::Infrastructure,
        }
    }

    /// Human-readable messages for the admin form.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CatalogError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
