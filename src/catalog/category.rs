//! Product category variants.

use serde::{Deserialize, Serialize};

/// Category of a catalog item, carrying category-specific metadata.
///
/// The set is closed: display formatting and stock-update side effects
/// dispatch over this enum rather than over trait objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Plain product with no extra metadata.
    #[default]
    General,
    /// Electronics with a warranty duration.
    Electronics { warranty_months: u32 },
    /// Clothing with a size label.
    Clothing { size: String },
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Electronics { .. } => "electronics",
            Category::Clothing { .. } => "clothing",
        }
    }

    /// Prefix used in display lines (e.g. `Electronics [E01] ...`).
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::General => "Product",
            Category::Electronics { .. } => "Electronics",
            Category::Clothing { .. } => "Clothing",
        }
    }
}
