//! Catalog item type and its shared handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Category, Describe};
use crate::discount::{valid_rate, Discountable};
use crate::ids::ProductId;

/// Shared handle to a catalog item.
///
/// The catalog, any cart lines, and any orders referencing the item all hold
/// clones of the same cell, so a stock decrement performed through the cart
/// is visible everywhere. Single logical writer; not a thread-safe handle.
pub type SharedProduct = Rc<RefCell<Product>>;

/// A sellable item in the catalog.
///
/// Identity is the `id` string: two products with the same id are the same
/// product no matter what their price, stock, or category say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique item identifier.
    pub id: ProductId,
    /// Item name.
    pub name: String,
    /// Unit price (non-negative).
    pub price: f64,
    /// Units in stock. Never driven below zero.
    pub stock: i64,
    /// Category-specific metadata and behavior.
    pub category: Category,
}

impl Product {
    /// Create a plain catalog item.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            category: Category::General,
        }
    }

    /// Create an electronics item with a warranty duration.
    pub fn electronics(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        warranty_months: u32,
    ) -> Self {
        Self {
            category: Category::Electronics { warranty_months },
            ..Self::new(id, name, price, stock)
        }
    }

    /// Create a clothing item with a size label.
    pub fn clothing(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        size: impl Into<String>,
    ) -> Self {
        Self {
            category: Category::Clothing { size: size.into() },
            ..Self::new(id, name, price, stock)
        }
    }

    /// Wrap the item in a shared cell for use by catalog lists and carts.
    pub fn into_shared(self) -> SharedProduct {
        Rc::new(RefCell::new(self))
    }

    /// Check if the item can currently be added to a cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Adjust stock by `delta`, refusing changes that would go negative.
    ///
    /// Returns `true` if the adjustment was applied. A refused adjustment
    /// leaves stock unchanged and emits a warning; it is not an error.
    /// Electronics announce careful handling first; category side effects
    /// compose with, and never bypass, the invariant check.
    pub fn update_stock(&mut self, delta: i64) -> bool {
        if let Category::Electronics { .. } = self.category {
            debug!(item = %self.id, "electronics stock update includes fragile handling");
        }
        if self.stock + delta < 0 {
            warn!(item = %self.id, stock = self.stock, delta, "not enough stock of {}", self.name);
            return false;
        }
        self.stock += delta;
        true
    }
}

// Identity comparison: id only.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Describe for Product {
    fn describe(&self) -> String {
        let mut line = format!(
            "{} [{}] {} - ${:.2} | Stock: {}",
            self.category.display_name(),
            self.id,
            self.name,
            self.price,
            self.stock
        );
        match &self.category {
            Category::General => {}
            Category::Electronics { warranty_months } => {
                line.push_str(&format!(" | Warranty: {warranty_months} months"));
            }
            Category::Clothing { size } => {
                line.push_str(&format!(" | Size: {size}"));
            }
        }
        line
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Discountable for Product {
    /// Preview the discounted price; the stored price is not touched.
    fn apply_discount(&mut self, rate: f64) -> f64 {
        if !valid_rate(rate) {
            return self.price;
        }
        self.price * (1.0 - rate)
    }
}
