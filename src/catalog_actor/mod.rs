//! Catalog store: products kept in a [`ResourceActor`](crate::actor_framework::ResourceActor),
//! plus demo seeding.

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::*;
