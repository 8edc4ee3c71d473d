use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info, instrument};

use super::error::CheckoutError;
use crate::clients::OrderClient;
use crate::domain::{Cart, CartLine, NewOrder, OrderId, OrderStatus, UserId};

/// What the shopper sees after a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

/// Persists a cart through the order store and resets it once the store has
/// committed.
#[derive(Clone)]
pub struct CheckoutWorkflow {
    orders: OrderClient,
}

impl CheckoutWorkflow {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    /// Places one order for everything in `cart`.
    ///
    /// An empty cart never reaches the order store. On any store failure the
    /// cart is left exactly as it was; nothing is retried.
    #[instrument(skip(self, cart), fields(cart_id = ?cart.id(), lines = cart.lines().len()))]
    pub async fn place_order(&self, cart: &mut Cart, user_id: UserId) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            info!("Checkout of empty cart, nothing to place");
            return Err(CheckoutError::EmptyCart);
        }

        let order = NewOrder {
            id: OrderId::generate(),
            user_id: user_id.clone(),
            status: OrderStatus::Ordered,
            items: cart.lines().iter().map(CartLine::to_order_item).collect(),
        };
        let total = cart.total();

        let order_id = match self.orders.place_order_with_items(order).await {
            Ok(order_id) => order_id,
            Err(e) => {
                error!(error = %e, "Order placement failed");
                return Err(CheckoutError::PlacementFailed(e));
            }
        };

        let lines = cart.lines().to_vec();
        cart.reset();
        info!(order_id = %order_id, total = %total, "Order placed");

        Ok(Receipt { order_id, user_id, lines, total })
    }
}
