use thiserror::Error;

use crate::error::ErrorKind;
use crate::order_actor::OrderStoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// Nothing to order; callers redirect back to the shop.
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Failed to place order")]
    PlacementFailed(#[source] OrderStoreError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CheckoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::EmptyCart => ErrorKind::Redirect,
            CheckoutError::PlacementFailed(_) | CheckoutError::ActorCommunicationError(_) => {
                ErrorKind::Infrastructure
            }
        }
    }
}
