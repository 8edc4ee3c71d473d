use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ids::ProductId;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price,
            description: String::new(),
            image: None,
            created_at: now,
            modified_at: now,
        }
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
}

/// Payload for editing a product. The image is left as is.
#[derive(Debug, Clone)]
pub struct ProductPatch {
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

/// Raw admin form input, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    /// Stored image path, already written by the upload collaborator.
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductForm {
    /// Checks every field and returns all failures together.
    pub fn validate(self) -> Result<ProductCreate, Vec<String>> {
        let mut messages = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            messages.push("Product name is required.".to_string());
        }

        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            messages.push("Product price is required.".to_string());
        }
        let price = match Decimal::from_str(raw_price) {
            Ok(price) if price >= Decimal::ZERO => Some(price),
            _ => {
                messages.push("Invalid price value.".to_string());
                None
            }
        };

        match price {
            Some(price) if messages.is_empty() => Ok(ProductCreate {
                name,
                price,
                description: self.description,
                image: self.image.filter(|image| !image.is_empty()),
            }),
            _ => Err(messages),
        }
    }

    pub fn validate_patch(self) -> Result<ProductPatch, Vec<String>> {
        self.validate().map(|create| ProductPatch {
            name: create.name,
            price: create.price,
            description: create.description,
        })
    }
}
