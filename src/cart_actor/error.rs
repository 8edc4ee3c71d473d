use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur while mutating a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Product not found in cart: {0}")]
    ItemNotFound(String),
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::ProductNotFound(_) | CartError::ItemNotFound(_) => ErrorKind::Validation,
            CartError::CatalogUnavailable(_) | CartError::ActorCommunicationError(_) => ErrorKind::Infrastructure,
        }
    }
}
