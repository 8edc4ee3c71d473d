use tokio::sync::mpsc;
use tracing::{debug, error, instrument};

use crate::clients::CatalogClient;
use crate::domain::{NewOrder, Order, OrderId, OrderStatus, OrderSummary, Page, PageRequest};
use crate::messages::OrderRequest;
use crate::order_actor::OrderStoreError;

/// Client for the order store.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderStoreError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| OrderStoreError::ActorCommunicationError(e.to_string()))
    }

    /// Admin form input: unknown status strings are a validation failure.
    #[instrument(skip(self))]
    pub async fn update_status_from_form(&self, id: OrderId, raw_status: &str) -> Result<(), OrderStoreError> {
        let status: OrderStatus = raw_status.parse().map_err(OrderStoreError::InvalidStatus)?;
        self.update_status(id, status).await
    }

    #[instrument(skip(self))]
    pub async fn order_page(&self, page: PageRequest) -> Result<Page<OrderSummary>, OrderStoreError> {
        let orders = self.list_orders(page).await?;
        let count = self.count_orders().await?;
        Ok(Page::new(orders, page, count))
    }

    /// Loads an order and joins each item with its catalog product.
    ///
    /// Items whose product has since left the catalog keep `product: None`.
    #[instrument(skip(self, catalog))]
    pub async fn get_order_with_products(
        &self,
        id: OrderId,
        catalog: &CatalogClient,
    ) -> Result<Order, OrderStoreError> {
        let mut order = self
            .get_order(id)
            .await?
            .ok_or_else(|| OrderStoreError::NotFound(id.to_string()))?;

        for item in &mut order.items {
            match catalog.get_product(item.product_id).await {
                Ok(product) => item.product = product,
                Err(e) => {
                    error!(error = %e, product_id = %item.product_id, "Product lookup failed");
                    return Err(OrderStoreError::ActorCommunicationError(e.to_string()));
                }
            }
        }
        Ok(order)
    }
}

client_method!(OrderClient => fn place_order_with_items(order: NewOrder) -> OrderId as OrderRequest::PlaceOrderWithItems, Error = OrderStoreError);
client_method!(OrderClient => fn get_order(id: OrderId) -> Option<Order> as OrderRequest::GetOrder, Error = OrderStoreError);
client_method!(OrderClient => fn list_orders(page: PageRequest) -> Vec<OrderSummary> as OrderRequest::ListOrders, Error = OrderStoreError);
client_method!(OrderClient => fn count_orders() -> usize as OrderRequest::CountOrders, Error = OrderStoreError);
client_method!(OrderClient => fn count_items() -> usize as OrderRequest::CountItems, Error = OrderStoreError);
client_method!(OrderClient => fn update_status(id: OrderId, status: OrderStatus) -> () as OrderRequest::UpdateStatus, Error = OrderStoreError);
client_method!(OrderClient => fn delete_order(id: OrderId) -> () as OrderRequest::DeleteOrder, Error = OrderStoreError);
