//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where an OrderId is expected. IDs are
//! caller-chosen strings ("P01", "O001") and compare by value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("P01");
        assert_eq!(id.as_str(), "P01");
    }

    #[test]
    fn test_id_from_str() {
        let id: OrderId = "O001".into();
        assert_eq!(id.as_str(), "O001");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("E01");
        assert_eq!(format!("{}", id), "E01");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
