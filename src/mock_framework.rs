//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] or [`create_mock_order_client`] to get a client
//! and the receiving end of its mailbox. Then use helpers like [`expect_get`]
//! or [`expect_place_order`] to assert what was sent and script the reply.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::clients::OrderClient;
use crate::domain::{NewOrder, OrderId};
use crate::messages::{OrderRequest, ServiceResponse};
use crate::order_actor::OrderStoreError;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock resource client and a receiver for asserting requests.
///
/// No actor runs behind the client; the test plays the actor by reading the
/// receiver and answering on the enclosed `respond_to` channels.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Creates an order client whose store is the returned receiver.
pub fn create_mock_order_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a PlaceOrderWithItems request
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(NewOrder, ServiceResponse<OrderId, OrderStoreError>)> {
    match receiver.recv().await {
        Some(OrderRequest::PlaceOrderWithItems { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CatalogClient;
    use crate::domain::{Product, ProductForm, ProductId};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(inner);

        let create_task = tokio::spawn(async move {
            let form = ProductForm { name: "Test".into(), price: "1.50".into(), ..Default::default() };
            catalog.create_product(form).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        assert_eq!(payload.price, Decimal::new(150, 2));
        let id = ProductId::generate();
        responder.send(Ok(id)).unwrap();

        let (requested, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(requested, id);
        let mut product = Product::new("Test", Decimal::new(150, 2));
        product.id = id;
        responder.send(Ok(Some(product.clone()))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(product));
    }
}
