//! # storefront
//!
//! Cart and checkout engine for a server-rendered shop, built as a small
//! actor system on tokio.
//!
//! - **Catalog store**: a generic [`ResourceActor`](actor_framework::ResourceActor) over [`Product`](domain::Product)
//! - **Order store**: [`OrderStoreService`](order_actor::OrderStoreService), all-or-nothing order writes
//! - **Cart engine**: [`CartService`](cart_actor::CartService), serialises cart mutations and runs checkout
//! - **Clients**: cloneable handles ([`CartClient`](clients::CartClient), ...) that the rendering layer calls
//!
//! Every client call returns plain serialisable data; errors classify
//! themselves through [`ErrorKind`](error::ErrorKind).
//!
//! ```rust,ignore
//! let system = ShopSystem::new(&ShopConfig::default());
//! let view = system.cart_client.add_item(SessionId::shared(), product_id).await?;
//! let receipt = system.cart_client.place_order(SessionId::shared(), user).await?;
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod catalog_actor;
pub mod checkout;
pub mod clients;
pub mod domain;
pub mod error;
pub mod messages;
pub mod order_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
