//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod shop_system;
pub mod logging;

pub use config::*;
pub use shop_system::*;
pub use logging::*;
