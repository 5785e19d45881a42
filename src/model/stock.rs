//! Stock buckets.
//!
//! [`StockFilter`] is what the list filter selects on; the buckets overlap
//! (every low-stock product is also in stock). [`StockLevel`] is the single
//! status shown next to each row. Zero is always out of stock, never low.

use std::fmt::Display;
use std::str::FromStr;

/// Highest stock count still considered low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockFilter {
    /// `stock > 0`
    InStock,
    /// `0 < stock <= 10`
    LowStock,
    /// `stock == 0`
    OutOfStock,
}

impl StockFilter {
    pub const ALL: [StockFilter; 3] = [
        StockFilter::InStock,
        StockFilter::LowStock,
        StockFilter::OutOfStock,
    ];

    pub fn matches(self, stock: u32) -> bool {
        match self {
            StockFilter::InStock => stock > 0,
            StockFilter::LowStock => stock > 0 && stock <= LOW_STOCK_THRESHOLD,
            StockFilter::OutOfStock => stock == 0,
        }
    }

    /// Wire/CLI spelling, e.g. `low-stock`.
    pub fn as_str(self) -> &'static str {
        match self {
            StockFilter::InStock => "in-stock",
            StockFilter::LowStock => "low-stock",
            StockFilter::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockFilter::InStock => "In Stock",
            StockFilter::LowStock => "Low Stock (≤10)",
            StockFilter::OutOfStock => "Out of Stock",
        }
    }
}

impl Display for StockFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stock filter '{0}' (expected in-stock, low-stock or out-of-stock)")]
pub struct UnknownStockFilter(pub String);

impl FromStr for StockFilter {
    type Err = UnknownStockFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| UnknownStockFilter(s.to_string()))
    }
}

/// Per-product stock status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Out,
    Low,
    Healthy,
}

impl StockLevel {
    pub fn of(stock: u32) -> Self {
        if stock == 0 {
            StockLevel::Out
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockLevel::Out => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::Healthy => "In Stock",
        }
    }
}
