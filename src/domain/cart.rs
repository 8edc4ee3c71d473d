//! Cart state and the rules for mutating it.
//!
//! A cart holds at most one line per product and never a line with quantity
//! zero: subtracting the last unit removes the line.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ids::{CartId, ProductId};
use super::order::NewOrderItem;
use super::product::Product;

/// One product's quantity and cost within a cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Snapshot taken when the product was first added.
    pub product: Product,
    pub quantity: u32,
    pub cost: Decimal,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product_id: product.id,
            cost: product.price,
            product,
            quantity: 1,
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.cost = self.product.price * Decimal::from(quantity);
    }

    pub fn to_order_item(&self) -> NewOrderItem {
        NewOrderItem {
            product_id: self.product_id,
            quantity: self.quantity,
            cost: self.cost,
        }
    }
}

/// Requested change to an existing line, parsed from the `action` query value.
///
/// Parsing never fails: unrecognised values become `Other` and leave the cart
/// as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Subtract,
    Remove,
    Other(String),
}

impl From<&str> for CartAction {
    fn from(value: &str) -> Self {
        match value {
            "add" => CartAction::Add,
            "subtract" => CartAction::Subtract,
            "remove" => CartAction::Remove,
            other => CartAction::Other(other.to_string()),
        }
    }
}

/// What happened to a line after a [`CartAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Updated,
    Removed,
    Unchanged,
}

/// Alert styling hint for the rendered cart message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Warning,
    Info,
}

/// Read-only picture of a cart, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub cart_id: Option<CartId>,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub message: Option<String>,
    pub alert: Option<AlertKind>,
    /// The whole cart should be re-rendered, not just the touched line.
    pub refresh: bool,
}

impl CartView {
    pub fn with_message(mut self, message: impl Into<String>, alert: AlertKind) -> Self {
        self.message = Some(message.into());
        self.alert = Some(alert);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    id: Option<CartId>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn id(&self) -> Option<CartId> {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.cost).sum()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    /// Returns the cart id, generating one on first use.
    pub fn ensure_id(&mut self) -> CartId {
        *self.id.get_or_insert_with(CartId::generate)
    }

    /// Bumps an existing line by one. `None` when the product is not in the cart.
    pub fn increment(&mut self, product_id: &ProductId) -> Option<&CartLine> {
        let line = self.lines.iter_mut().find(|line| &line.product_id == product_id)?;
        line.set_quantity(line.quantity.saturating_add(1));
        Some(&*line)
    }

    /// Adds a product, or bumps its line if it is already present.
    pub fn insert(&mut self, product: Product) -> &CartLine {
        self.ensure_id();
        match self.lines.iter().position(|line| line.product_id == product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.set_quantity(line.quantity.saturating_add(1));
                &*line
            }
            None => {
                self.lines.push(CartLine::new(product));
                &self.lines[self.lines.len() - 1]
            }
        }
    }

    /// Applies `action` to the line for `product_id`. `None` when there is no
    /// such line.
    pub fn apply(&mut self, product_id: &ProductId, action: &CartAction) -> Option<LineChange> {
        let index = self.lines.iter().position(|line| &line.product_id == product_id)?;
        let change = match action {
            CartAction::Add => {
                let line = &mut self.lines[index];
                line.set_quantity(line.quantity.saturating_add(1));
                LineChange::Updated
            }
            CartAction::Subtract if self.lines[index].quantity > 1 => {
                let line = &mut self.lines[index];
                line.set_quantity(line.quantity - 1);
                LineChange::Updated
            }
            CartAction::Subtract | CartAction::Remove => {
                self.lines.remove(index);
                LineChange::Removed
            }
            CartAction::Other(_) => LineChange::Unchanged,
        };
        Some(change)
    }

    /// Empties the cart and forgets its id.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.id = None;
    }

    pub fn view(&self) -> CartView {
        CartView {
            cart_id: self.id,
            lines: self.lines.clone(),
            total: self.total(),
            message: None,
            alert: None,
            refresh: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(name: &str, price: &str) -> Product {
        Product::new(name, price.parse().unwrap())
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::default();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.id().is_none());
    }

    #[test]
    fn test_add_subtract_walkthrough() {
        let a = product("A", "9.99");
        let mut cart = Cart::default();

        cart.insert(a.clone());
        assert_eq!(cart.total(), Decimal::new(999, 2));
        assert_eq!(cart.line(&a.id).unwrap().quantity, 1);

        let line = cart.increment(&a.id).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.cost, Decimal::new(1998, 2));

        assert_eq!(cart.apply(&a.id, &CartAction::Subtract), Some(LineChange::Updated));
        assert_eq!(cart.line(&a.id).unwrap().cost, Decimal::new(999, 2));

        assert_eq!(cart.apply(&a.id, &CartAction::Subtract), Some(LineChange::Removed));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let a = product("A", "2.00");
        let mut cart = Cart::default();
        cart.insert(a.clone());
        cart.insert(a.clone());
        cart.insert(a.clone());
        assert_eq!(cart.apply(&a.id, &CartAction::Remove), Some(LineChange::Removed));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let a = product("A", "2.00");
        let mut cart = Cart::default();
        cart.insert(a.clone());
        let before = cart.view();
        assert_eq!(cart.apply(&a.id, &CartAction::from("explode")), Some(LineChange::Unchanged));
        assert_eq!(cart.view(), before);
    }

    #[test]
    fn test_missing_line() {
        let mut cart = Cart::default();
        assert_eq!(cart.apply(&ProductId::generate(), &CartAction::Add), None);
        assert!(cart.increment(&ProductId::generate()).is_none());
    }

    #[test]
    fn test_reset_discards_id() {
        let mut cart = Cart::default();
        cart.insert(product("A", "1.00"));
        let first = cart.id().unwrap();
        cart.reset();
        assert!(cart.id().is_none());
        cart.insert(product("B", "1.00"));
        assert_ne!(cart.id().unwrap(), first);
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(CartAction::from("add"), CartAction::Add);
        assert_eq!(CartAction::from("subtract"), CartAction::Subtract);
        assert_eq!(CartAction::from("remove"), CartAction::Remove);
        assert_eq!(CartAction::from(""), CartAction::Other(String::new()));
    }

    proptest! {
        #[test]
        fn prop_repeated_adds_track_quantity(adds in 1u32..50, cents in 0i64..100_000) {
            let p = Product::new("P", Decimal::new(cents, 2));
            let mut cart = Cart::default();
            for _ in 0..adds {
                cart.insert(p.clone());
            }
            let line = cart.line(&p.id).unwrap();
            prop_assert_eq!(line.quantity, adds);
            prop_assert_eq!(line.cost, p.price * Decimal::from(adds));
            prop_assert_eq!(cart.lines().len(), 1);
        }

        #[test]
        fn prop_total_is_sum_of_lines(ops in proptest::collection::vec((0usize..4, 0u8..4), 0..60)) {
            let products: Vec<Product> = (0..4)
                .map(|i| Product::new(format!("P{i}"), Decimal::new(100 * i as i64 + 99, 2)))
                .collect();
            let mut cart = Cart::default();
            for (index, op) in ops {
                let p = &products[index];
                match op {
                    0 => { cart.insert(p.clone()); }
                    1 => { cart.apply(&p.id, &CartAction::Add); }
                    2 => { cart.apply(&p.id, &CartAction::Subtract); }
                    _ => { cart.apply(&p.id, &CartAction::Remove); }
                }
                let sum: Decimal = cart.lines().iter().map(|line| line.cost).sum();
                prop_assert_eq!(cart.total(), sum);
                prop_assert!(cart.lines().iter().all(|line| line.quantity >= 1));
                let mut ids: Vec<_> = cart.lines().iter().map(|line| line.product_id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.lines().len());
            }
        }
    }
}
