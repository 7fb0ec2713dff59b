//! Retail domain types and logic.
//!
//! This crate provides in-memory types for a small store domain:
//!
//! - **Catalog**: items with per-category display and stock behavior, plus a
//!   generic ordered container
//! - **Cart**: stock-gated insertion with duplicate merging and a running
//!   total
//! - **Checkout**: orders that freeze a cart snapshot under an identifier
//! - **Discounts**: one capability shared by items (preview) and carts
//!   (apply)
//!
//! Items are shared between the catalog and carts through
//! [`SharedProduct`](catalog::SharedProduct) handles, so a stock decrement
//! performed by a cart is visible wherever the item is referenced.
//!
//! # Example
//!
//! ```
//! use storekit::prelude::*;
//!
//! let book = Product::new("P01", "Book", 10.0, 5).into_shared();
//!
//! let mut catalog = InventoryList::new();
//! catalog.add(book.clone());
//!
//! let mut cart = Cart::new();
//! cart.add_item(&book)?;
//! cart.add_item(&book)?;
//! cart.apply_discount(0.1);
//!
//! let order = Order::new("O001", &cart);
//! println!("{}", order.describe());
//! # Ok::<(), storekit::StoreError>(())
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod discount;

pub use discount::Discountable;
pub use error::StoreError;
pub use ids::{OrderId, ProductId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{OrderId, ProductId};

    pub use crate::catalog::{Category, Describe, InventoryList, Product, SharedProduct};

    pub use crate::cart::{Cart, CartLine};

    pub use crate::checkout::Order;

    pub use crate::discount::Discountable;
}
