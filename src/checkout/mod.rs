//! Checkout: turns a cart into a persisted order, all or nothing.

pub mod error;
pub mod workflow;

pub use error::*;
pub use workflow::*;
