//! Thin, cloneable handles over actor mailboxes. Method bodies are generated by
//! the macros below, so every call gets the same tracing and error mapping.

#[macro_use]
mod macros;

mod cart_client;
mod catalog_client;
mod order_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
