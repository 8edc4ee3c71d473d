//! Cart engine: owns every live cart and applies add/update/remove, then hands
//! a finished cart to checkout without letting other mutations interleave.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
