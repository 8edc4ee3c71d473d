use tokio::sync::oneshot;

use crate::cart_actor::CartError;
use crate::checkout::{CheckoutError, Receipt};
use crate::domain::{CartAction, CartView, NewOrder, Order, OrderId, OrderStatus, OrderSummary, PageRequest, ProductId, SessionId, UserId};
use crate::order_actor::OrderStoreError;
use rust_decimal::Decimal;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes parameters
/// and a oneshot channel for responses.

#[derive(Debug)]
pub enum OrderRequest {
    PlaceOrderWithItems {
        order: NewOrder,
        respond_to: ServiceResponse<OrderId, OrderStoreError>,
    },
    GetOrder {
        id: OrderId,
        respond_to: ServiceResponse<Option<Order>, OrderStoreError>,
    },
    ListOrders {
        page: PageRequest,
        respond_to: ServiceResponse<Vec<OrderSummary>, OrderStoreError>,
    },
    CountOrders {
        respond_to: ServiceResponse<usize, OrderStoreError>,
    },
    UpdateStatus {
        id: OrderId,
        status: OrderStatus,
        respond_to: ServiceResponse<(), OrderStoreError>,
    },
    DeleteOrder {
        id: OrderId,
        respond_to: ServiceResponse<(), OrderStoreError>,
    },
    CountItems {
        respond_to: ServiceResponse<usize, OrderStoreError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum CartRequest {
    AddItem {
        session: SessionId,
        product_id: ProductId,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    UpdateItem {
        session: SessionId,
        product_id: ProductId,
        action: CartAction,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    GetTotal {
        session: SessionId,
        respond_to: ServiceResponse<Decimal, CartError>,
    },
    Snapshot {
        session: SessionId,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    PlaceOrder {
        session: SessionId,
        user_id: UserId,
        respond_to: ServiceResponse<Receipt, CheckoutError>,
    },
    Shutdown,
}
