use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::error::CartError;
use crate::checkout::{CheckoutError, CheckoutWorkflow, Receipt};
use crate::clients::{CartClient, CatalogClient};
use crate::domain::{AlertKind, Cart, CartAction, CartView, LineChange, ProductId, SessionId, UserId};
use crate::messages::{CartRequest, ServiceResponse};

/// Cart engine actor.
///
/// Carts are keyed by [`SessionId`]. The application routes every shopper to
/// [`SessionId::shared`], so in practice all requests see one cart; the
/// mailbox serialises their mutations.
///
/// A session's cart is created by its first successful add and dropped by a
/// successful checkout. Carts emptied by subtract or remove keep their id and
/// stay in the map; there is no idle eviction.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    carts: HashMap<SessionId, Cart>,
    catalog: CatalogClient,
    checkout: CheckoutWorkflow,
}

impl CartService {
    pub fn new(buffer_size: usize, catalog: CatalogClient, checkout: CheckoutWorkflow) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            carts: HashMap::new(),
            catalog,
            checkout,
        };
        (service, CartClient::new(sender))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { session, product_id, respond_to } => {
                    self.handle_add_item(session, product_id, respond_to).await;
                }
                CartRequest::UpdateItem { session, product_id, action, respond_to } => {
                    self.handle_update_item(session, product_id, action, respond_to);
                }
                CartRequest::GetTotal { session, respond_to } => {
                    self.handle_get_total(session, respond_to);
                }
                CartRequest::Snapshot { session, respond_to } => {
                    let view = self.carts.get(&session).map(Cart::view).unwrap_or_else(|| Cart::default().view());
                    let _ = respond_to.send(Ok(view));
                }
                CartRequest::PlaceOrder { session, user_id, respond_to } => {
                    self.handle_place_order(session, user_id, respond_to).await;
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    /// Adds one unit of a product. Existing lines are bumped without asking
    /// the catalog again; new lines snapshot the product as it is now.
    #[instrument(fields(session = %session, product_id = %product_id), skip(self, session, respond_to))]
    async fn handle_add_item(
        &mut self,
        session: SessionId,
        product_id: ProductId,
        respond_to: ServiceResponse<CartView, CartError>,
    ) {
        debug!("Processing add_item request");
        if let Some(cart) = self.carts.get_mut(&session) {
            if let Some(line) = cart.increment(&product_id) {
                let message = format!("{} quantity updated.", line.product.name);
                info!(quantity = line.quantity, "Cart line incremented");
                let _ = respond_to.send(Ok(cart.view().with_message(message, AlertKind::Warning)));
                return;
            }
        }

        let product = match self.catalog.get_product(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                warn!("Product not found");
                let _ = respond_to.send(Err(CartError::ProductNotFound(product_id.to_string())));
                return;
            }
            Err(e) => {
                error!(error = %e, "Catalog lookup failed");
                let _ = respond_to.send(Err(CartError::CatalogUnavailable(e.to_string())));
                return;
            }
        };

        let message = format!("{} added.", product.name);
        let cart = self.carts.entry(session).or_default();
        cart.insert(product);
        info!(lines = cart.lines().len(), "Cart line added");
        let _ = respond_to.send(Ok(cart.view().with_message(message, AlertKind::Success)));
    }

    #[instrument(fields(session = %session, product_id = %product_id, action = ?action), skip(self, session, respond_to))]
    fn handle_update_item(
        &mut self,
        session: SessionId,
        product_id: ProductId,
        action: CartAction,
        respond_to: ServiceResponse<CartView, CartError>,
    ) {
        debug!("Processing update_item request");
        let result = match self.carts.get_mut(&session) {
            Some(cart) => match cart.apply(&product_id, &action) {
                Some(change) => {
                    if let CartAction::Other(raw) = &action {
                        debug!(raw = %raw, "Unrecognised cart action ignored");
                    }
                    let mut view = cart.view();
                    view.alert = Some(AlertKind::Info);
                    view.refresh = change == LineChange::Removed;
                    Ok(view)
                }
                None => Err(CartError::ItemNotFound(product_id.to_string())),
            },
            None => Err(CartError::ItemNotFound(product_id.to_string())),
        };
        if let Err(e) = &result {
            warn!(error = %e, "Cart update rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(session = %session), skip(self, session, respond_to))]
    fn handle_get_total(&self, session: SessionId, respond_to: ServiceResponse<Decimal, CartError>) {
        let total = self.carts.get(&session).map_or(Decimal::ZERO, Cart::total);
        debug!(total = %total, "Cart total");
        let _ = respond_to.send(Ok(total));
    }

    /// Runs checkout inside the actor so no add or update can slip in between
    /// reading the lines and resetting the cart.
    #[instrument(fields(session = %session, user_id = %user_id), skip(self, session, user_id, respond_to))]
    async fn handle_place_order(
        &mut self,
        session: SessionId,
        user_id: UserId,
        respond_to: ServiceResponse<Receipt, CheckoutError>,
    ) {
        debug!("Processing place_order request");
        let result = match self.carts.get_mut(&session) {
            Some(cart) => self.checkout.place_order(cart, user_id).await,
            None => Err(CheckoutError::EmptyCart),
        };
        if result.is_ok() {
            self.carts.remove(&session);
        }
        let _ = respond_to.send(result);
    }
}
