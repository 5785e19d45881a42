//! The product record and its submission payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::{Category, StockLevel};

/// Opaque identifier assigned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a product in the inventory, as returned by the record store.
///
/// The identifier is assigned by the store and never changes. Every other field
/// can be replaced through an update carrying [`ProductFields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    /// Kept as the store's string: records may carry labels outside [`Category`].
    pub category: String,
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a new Product instance without timestamps.
    ///
    /// # Arguments
    /// * `id` - Identifier (normally assigned by the store)
    /// * `name` - Product name
    /// * `category` - Category label
    /// * `price` - Unit price
    /// * `stock` - Units on hand
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::of(self.stock)
    }

    /// Overwrites every mutable field with a submitted payload.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.category = fields.category.label().to_string();
        self.price = fields.price;
        self.stock = fields.stock;
    }
}

/// Normalized payload for create and update requests.
///
/// Produced by [`validate`](crate::validation::validate); serializes to the
/// `{name, price, category, stock}` body the store expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub stock: u32,
}
