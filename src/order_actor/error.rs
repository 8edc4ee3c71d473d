use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderStoreError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order has no items")]
    EmptyOrder,
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
    #[error("Order conflict: {0}")]
    Conflict(String),
    #[error("Order constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderStoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderStoreError::NotFound(_) => ErrorKind::NotFound,
            OrderStoreError::InvalidStatus(_) => ErrorKind::Validation,
            OrderStoreError::EmptyOrder
            | OrderStoreError::Conflict(_)
            | OrderStoreError::ConstraintViolation(_)
            | OrderStoreError::ActorCommunicationError(_) => ErrorKind::Infrastructure,
        }
    }
}
