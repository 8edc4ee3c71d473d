//! Business data: catalog products, carts, orders and paging. No actor concerns.

pub mod cart;
pub mod ids;
pub mod order;
pub mod page;
pub mod product;

pub use cart::*;
pub use ids::*;
pub use order::*;
pub use page::*;
pub use product::*;
