//! Database models mapping to the product schema.

use sqlx::FromRow;

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductRow {
    /// Storage-assigned identity; never changes after insert.
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub version: i32,
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductRow {
    pub name: String,
    pub quantity: i32,
    /// Starting version. `None` stores [`stockpile_core::INITIAL_VERSION`].
    pub version: Option<i32>,
}

impl NewProductRow {
    /// Candidate with the default starting version.
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
            version: None,
        }
    }

    /// Version this candidate will be stored with.
    pub fn initial_version(&self) -> i32 {
        self.version.unwrap_or(stockpile_core::INITIAL_VERSION)
    }
}
