use chrono::Utc;
use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId, ProductPatch};

impl Entity for Product {
    type Id = ProductId;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from a validated payload.
    ///
    /// # Arguments
    /// * `id` - Time-ordered identifier for the product
    /// * `payload` - Name, price, description and stored image path
    fn from_create(id: ProductId, payload: ProductCreate) -> Result<Self, String> {
        if payload.price < Decimal::ZERO {
            return Err(format!("Negative price: {}", payload.price));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: payload.name,
            price: payload.price,
            description: payload.description,
            image: payload.image,
            created_at: now,
            modified_at: now,
        })
    }

    /// Replaces name, price and description and stamps the modification time.
    ///
    /// The image reference is kept; replacing it is the upload collaborator's job.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if patch.price < Decimal::ZERO {
            return Err(format!("Negative price: {}", patch.price));
        }
        self.name = patch.name;
        self.price = patch.price;
        self.description = patch.description;
        self.modified_at = Utc::now();
        Ok(())
    }
}
