use tracing::{error, info, instrument, warn};

use super::config::ShopConfig;
use crate::actor_framework::ResourceActor;
use crate::cart_actor::CartService;
use crate::checkout::CheckoutWorkflow;
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::domain::{Product, ProductId};
use crate::order_actor::OrderStoreService;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ShopSystem {
    pub cart_client: CartClient,
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Create and start the actor system.
    ///
    /// **Startup Order:**
    /// 1. Leaf stores (catalog, orders)
    /// 2. Cart engine, given clients for both stores
    #[instrument(name = "shop_system", skip(config), fields(mailbox_size = config.mailbox_size))]
    pub fn new(config: &ShopConfig) -> Self {
        let mut handles = Vec::new();
        info!("Starting shop system");

        let (catalog_actor, catalog_inner) = ResourceActor::<Product>::new(config.mailbox_size, ProductId::generate);
        let catalog_client = CatalogClient::new(catalog_inner);
        handles.push(tokio::spawn(catalog_actor.run()));

        let (order_service, order_sender) = OrderStoreService::new(config.mailbox_size);
        let order_client = OrderClient::new(order_sender);
        handles.push(tokio::spawn(order_service.run()));

        let checkout = CheckoutWorkflow::new(order_client.clone());
        let (cart_service, cart_client) = CartService::new(config.mailbox_size, catalog_client.clone(), checkout);
        handles.push(tokio::spawn(cart_service.run()));

        info!("Shop system started successfully");

        Self {
            cart_client,
            catalog_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shutdown the entire actor system
    ///
    /// **Shutdown Order:**
    /// 1. Cart engine first (it depends on both stores)
    /// 2. Order store
    /// 3. Catalog, which stops once every client handle is dropped
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system");

        if let Err(e) = self.cart_client.shutdown().await {
            warn!(error = %e, "Cart engine already stopped");
        }
        if let Err(e) = self.order_client.shutdown().await {
            warn!(error = %e, "Order store already stopped");
        }
        drop(self.cart_client);
        drop(self.order_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("Shop system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_completes() {
        let system = ShopSystem::new(&ShopConfig::default());
        assert_eq!(system.shutdown().await, Ok(()));
    }

    #[tokio::test]
    async fn test_shutdown_after_services_already_stopped() {
        let system = ShopSystem::new(&ShopConfig::default());
        system.cart_client.shutdown().await.unwrap();
        system.order_client.shutdown().await.unwrap();
        tokio::task::yield_now().await;

        assert_eq!(system.shutdown().await, Ok(()));
    }
}
