//! Order store: transactional order persistence behind an actor.

pub mod error;
pub mod service;
pub mod tables;

pub use error::*;
pub use service::*;
