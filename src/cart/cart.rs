//! Cart and line item types.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{Describe, SharedProduct};
use crate::discount::{valid_rate, Discountable};
use crate::error::StoreError;

/// A line in the cart: a shared item handle plus a purchase count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The item being purchased. Shared with the catalog, so stock changes
    /// made through the cart are visible there.
    pub item: SharedProduct,
    /// Units of the item in the cart. Starts at 1, grows on repeat adds.
    pub quantity: u32,
}

/// A shopping cart.
///
/// Holds at most one line per distinct item id and a running total. The
/// total accrues the item's price once per successful [`add_item`] call; it
/// is never recomputed from line quantities, so a price change between two
/// adds of the same item leaves a mixed total.
///
/// [`add_item`]: Cart::add_item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: f64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item to the cart.
    ///
    /// Out-of-stock items are refused with [`StoreError::OutOfStock`]; the
    /// cart is left untouched and the caller may continue. Otherwise the
    /// item merges into an existing line (same id) or starts a new one, its
    /// current price accrues onto the total, and its stock drops by one
    /// through the shared handle.
    pub fn add_item(&mut self, item: &SharedProduct) -> Result<(), StoreError> {
        let price = {
            let product = item.borrow();
            if !product.is_in_stock() {
                warn!(item = %product.id, "cannot add {} (out of stock)", product.name);
                return Err(StoreError::OutOfStock {
                    name: product.name.clone(),
                });
            }
            product.price
        };

        let existing = self
            .lines
            .iter_mut()
            .find(|line| *line.item.borrow() == *item.borrow());
        match existing {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: Rc::clone(item),
                quantity: 1,
            }),
        }

        self.total += price;
        item.borrow_mut().update_stock(-1);
        Ok(())
    }

    /// Lines currently in the cart, in first-add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Running total accrued across successful adds.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count (sum of line quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Check if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Describe for Cart {
    fn describe(&self) -> String {
        let mut out = String::from("=== Cart Contents ===\n");
        for line in &self.lines {
            out.push_str(&format!("{}x {}\n", line.quantity, line.item.describe()));
        }
        out.push_str(&format!("Total: ${:.2}", self.total));
        out
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Discountable for Cart {
    /// Rescale the stored total in place and return the new total.
    fn apply_discount(&mut self, rate: f64) -> f64 {
        if valid_rate(rate) {
            self.total *= 1.0 - rate;
        }
        self.total
    }
}
