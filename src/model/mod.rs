//! Pure data structures: products, the category label set and stock buckets.

pub mod category;
pub mod product;
pub mod stock;

pub use category::*;
pub use product::*;
pub use stock::*;
