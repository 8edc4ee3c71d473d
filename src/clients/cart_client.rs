use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::cart_actor::CartError;
use crate::checkout::{CheckoutError, Receipt};
use crate::domain::{CartAction, CartView, ProductId, SessionId, UserId};
use crate::messages::CartRequest;

/// Client for the cart engine. This is the surface the rendering layer talks to.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Takes the raw `action` query value; unknown actions leave the cart alone.
    pub async fn update_item_from_query(
        &self,
        session: SessionId,
        product_id: ProductId,
        raw_action: &str,
    ) -> Result<CartView, CartError> {
        self.update_item(session, product_id, CartAction::from(raw_action)).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(CartClient => fn add_item(session: SessionId, product_id: ProductId) -> CartView as CartRequest::AddItem, Error = CartError);
client_method!(CartClient => fn update_item(session: SessionId, product_id: ProductId, action: CartAction) -> CartView as CartRequest::UpdateItem, Error = CartError);
client_method!(CartClient => fn get_total(session: SessionId) -> Decimal as CartRequest::GetTotal, Error = CartError);
client_method!(CartClient => fn snapshot(session: SessionId) -> CartView as CartRequest::Snapshot, Error = CartError);
client_method!(CartClient => fn place_order(session: SessionId, user_id: UserId) -> Receipt as CartRequest::PlaceOrder, Error = CheckoutError);
