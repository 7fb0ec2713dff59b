//! Order types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Describe;
use crate::ids::OrderId;

/// A placed order: an identifier over a frozen cart.
///
/// Construction clones the cart's lines and total, so later mutation of the
/// original cart never shows up here. Item *handles* inside the lines stay
/// shared with the catalog: identity is never copied, only quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    order_id: OrderId,
    cart: Cart,
    /// Unix timestamp of creation.
    created_at: i64,
}

impl Order {
    /// Freeze the cart's current state under `order_id`.
    pub fn new(order_id: impl Into<OrderId>, cart: &Cart) -> Self {
        Self {
            order_id: order_id.into(),
            cart: cart.clone(),
            created_at: current_timestamp(),
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// The cart state captured at construction.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Describe for Order {
    fn describe(&self) -> String {
        format!("=== Order {} ===\n{}", self.order_id, self.cart.describe())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
