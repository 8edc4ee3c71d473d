//! In-memory order tables with all-or-nothing transactions.
//!
//! Writes go to a [`Transaction`] first and only reach the tables on
//! [`Transaction::commit`]. Dropping a transaction discards everything it
//! staged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::error::OrderStoreError;
use crate::domain::{OrderId, OrderStatus, ProductId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub cost: Decimal,
}

#[derive(Debug, Default)]
pub struct OrderTables {
    orders: BTreeMap<OrderId, OrderRow>,
    items: Vec<ItemRow>,
}

impl OrderTables {
    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction {
            tables: self,
            orders: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn order(&self, id: &OrderId) -> Option<&OrderRow> {
        self.orders.get(id)
    }

    pub fn orders(&self) -> impl Iterator<Item = &OrderRow> {
        self.orders.values()
    }

    pub fn items_of<'a>(&'a self, id: &'a OrderId) -> impl Iterator<Item = &'a ItemRow> + 'a {
        self.items.iter().filter(move |item| &item.order_id == id)
    }

    pub fn order_total(&self, id: &OrderId) -> Decimal {
        self.items_of(id).map(|item| item.cost).sum()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of rows touched (0 or 1).
    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> usize {
        match self.orders.get_mut(id) {
            Some(row) => {
                row.status = status;
                1
            }
            None => 0,
        }
    }

    /// Deletes an order and its items. Returns the number of order rows removed.
    pub fn delete(&mut self, id: &OrderId) -> usize {
        let removed = self.orders.remove(id).map_or(0, |_| 1);
        self.items.retain(|item| &item.order_id != id);
        removed
    }
}

/// Staged writes against [`OrderTables`].
pub struct Transaction<'a> {
    tables: &'a mut OrderTables,
    orders: Vec<OrderRow>,
    items: Vec<ItemRow>,
}

impl Transaction<'_> {
    pub fn insert_order(&mut self, row: OrderRow) -> Result<(), OrderStoreError> {
        let duplicate =
            self.tables.orders.contains_key(&row.id) || self.orders.iter().any(|staged| staged.id == row.id);
        if duplicate {
            return Err(OrderStoreError::Conflict(format!("order {} already exists", row.id)));
        }
        self.orders.push(row);
        Ok(())
    }

    pub fn insert_item(&mut self, row: ItemRow) -> Result<(), OrderStoreError> {
        let order_known = self.tables.orders.contains_key(&row.order_id)
            || self.orders.iter().any(|staged| staged.id == row.order_id);
        if !order_known {
            return Err(OrderStoreError::ConstraintViolation(format!(
                "item references unknown order {}",
                row.order_id
            )));
        }
        if row.quantity == 0 {
            return Err(OrderStoreError::ConstraintViolation(format!(
                "item {} has zero quantity",
                row.product_id
            )));
        }
        if row.cost < Decimal::ZERO {
            return Err(OrderStoreError::ConstraintViolation(format!(
                "item {} has negative cost",
                row.product_id
            )));
        }
        let duplicate = self
            .tables
            .items
            .iter()
            .chain(self.items.iter())
            .any(|item| item.order_id == row.order_id && item.product_id == row.product_id);
        if duplicate {
            return Err(OrderStoreError::Conflict(format!(
                "product {} already on order {}",
                row.product_id, row.order_id
            )));
        }
        self.items.push(row);
        Ok(())
    }

    pub fn commit(self) {
        for row in self.orders {
            self.tables.orders.insert(row.id, row);
        }
        self.tables.items.extend(self.items);
    }
}
