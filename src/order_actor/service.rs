use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::error::OrderStoreError;
use super::tables::{ItemRow, OrderRow, OrderTables};
use crate::clients::OrderClient;
use crate::domain::{NewOrder, Order, OrderId, OrderItem, OrderStatus, OrderSummary, PageRequest};
use crate::messages::{OrderRequest, ServiceResponse};

/// Order store actor. Owns the order tables; every write goes through a
/// transaction that commits whole or not at all.
pub struct OrderStoreService {
    receiver: mpsc::Receiver<OrderRequest>,
    tables: OrderTables,
}

impl OrderStoreService {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<OrderRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            tables: OrderTables::default(),
        };
        (service, sender)
    }

    #[instrument(name = "order_store", skip(self))]
    pub async fn run(mut self) {
        info!("OrderStoreService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::PlaceOrderWithItems { order, respond_to } => {
                    let _ = respond_to.send(self.handle_place_order(order));
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                OrderRequest::ListOrders { page, respond_to } => {
                    self.handle_list_orders(page, respond_to);
                }
                OrderRequest::CountOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.tables.order_count()));
                }
                OrderRequest::UpdateStatus { id, status, respond_to } => {
                    let _ = respond_to.send(self.handle_update_status(id, status));
                }
                OrderRequest::DeleteOrder { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete_order(id));
                }
                OrderRequest::CountItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.tables.item_count()));
                }
                OrderRequest::Shutdown => {
                    info!("OrderStoreService shutting down");
                    break;
                }
            }
        }
        info!("OrderStoreService stopped");
    }

    /// Header and items land together or not at all.
    #[instrument(fields(order_id = %order.id, user_id = %order.user_id, items = order.items.len()), skip(self, order))]
    fn handle_place_order(&mut self, order: NewOrder) -> Result<OrderId, OrderStoreError> {
        debug!("Processing place_order_with_items request");
        if order.items.is_empty() {
            warn!("Refusing order without items");
            return Err(OrderStoreError::EmptyOrder);
        }

        let mut tx = self.tables.begin();
        tx.insert_order(OrderRow {
            id: order.id,
            user_id: order.user_id,
            status: order.status,
            date: Utc::now(),
        })?;
        for item in order.items {
            if let Err(e) = tx.insert_item(ItemRow {
                order_id: order.id,
                product_id: item.product_id,
                quantity: item.quantity,
                cost: item.cost,
            }) {
                error!(error = %e, "Item insert failed, rolling back");
                return Err(e);
            }
        }
        tx.commit();

        info!("Order committed");
        Ok(order.id)
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: OrderId, respond_to: ServiceResponse<Option<Order>, OrderStoreError>) {
        debug!("Processing get_order request");
        let order = self.tables.order(&id).map(|row| {
            let items: Vec<OrderItem> = self
                .tables
                .items_of(&id)
                .map(|item| OrderItem {
                    order_id: item.order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    cost: item.cost,
                    product: None,
                })
                .collect();
            Order {
                id: row.id,
                user_id: row.user_id.clone(),
                status: row.status,
                date: row.date,
                total: items.iter().map(|item| item.cost).sum(),
                items,
            }
        });
        match &order {
            Some(order) => info!(total = %order.total, "Order found"),
            None => debug!("Order not found"),
        }
        let _ = respond_to.send(Ok(order));
    }

    #[instrument(fields(page = page.page(), size = page.size()), skip(self, respond_to))]
    fn handle_list_orders(&self, page: PageRequest, respond_to: ServiceResponse<Vec<OrderSummary>, OrderStoreError>) {
        debug!("Processing list_orders request");
        let orders: Vec<OrderSummary> = self
            .tables
            .orders()
            .skip(page.offset())
            .take(page.size())
            .map(|row| OrderSummary {
                id: row.id,
                user_id: row.user_id.clone(),
                status: row.status,
                date: row.date,
                total: self.tables.order_total(&row.id),
            })
            .collect();
        info!(order_count = orders.len(), "Listed orders");
        let _ = respond_to.send(Ok(orders));
    }

    /// Writes `status` regardless of the current one.
    #[instrument(fields(order_id = %id, status = %status), skip(self))]
    fn handle_update_status(&mut self, id: OrderId, status: OrderStatus) -> Result<(), OrderStoreError> {
        debug!("Processing update_status request");
        if self.tables.update_status(&id, status) == 0 {
            error!("Order not found for status update");
            return Err(OrderStoreError::NotFound(id.to_string()));
        }
        info!("Order status updated");
        Ok(())
    }

    #[instrument(fields(order_id = %id), skip(self))]
    fn handle_delete_order(&mut self, id: OrderId) -> Result<(), OrderStoreError> {
        debug!("Processing delete_order request");
        if self.tables.delete(&id) == 0 {
            error!("Order not found for delete");
            return Err(OrderStoreError::NotFound(id.to_string()));
        }
        info!("Order deleted");
        Ok(())
    }
}
