//! In-process backend, used by the `--memory` CLI mode and by tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::error::RemoteError;
use crate::framework::RecordStore;
use crate::model::{Product, ProductFields, ProductId};

/// Products kept in a `Vec`, in insertion order. Ids are `product_{n}`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            next_id: products.len() as u64,
            products,
        }
    }

    /// A dozen sample products: two out of stock, three running low.
    pub fn demo() -> Self {
        let rows: [(&str, &str, f64, u32); 12] = [
            ("Wireless Mouse", "Electronics", 24.99, 42),
            ("Mechanical Keyboard", "Electronics", 89.0, 7),
            ("Denim Jacket", "Clothing", 59.5, 0),
            ("The Rust Book", "Books", 39.95, 15),
            ("Garden Hose", "Home & Garden", 32.0, 3),
            ("Yoga Mat", "Sports", 25.0, 28),
            ("Building Blocks", "Toys", 44.99, 12),
            ("Cold Brew Coffee", "Food & Beverages", 11.49, 0),
            ("Face Serum", "Health & Beauty", 18.75, 9),
            ("Car Wax", "Automotive", 14.2, 31),
            ("Desk Lamp", "Home & Garden", 27.3, 19),
            ("Gift Card", "Other", 50.0, 100),
        ];
        let products = rows
            .iter()
            .enumerate()
            .map(|(n, (name, category, price, stock))| {
                let mut product =
                    Product::new(format!("product_{}", n + 1), *name, *category, *price, *stock);
                let stamp = Utc
                    .with_ymd_and_hms(2024, 1, 1 + n as u32, 9, 30, 0)
                    .single();
                product.created_at = stamp;
                product.updated_at = stamp;
                product
            })
            .collect();
        Self::with_products(products)
    }

    fn next_id(&mut self) -> ProductId {
        self.next_id += 1;
        ProductId(format!("product_{}", self.next_id))
    }

    fn position(&self, id: &ProductId) -> Result<usize, RemoteError> {
        self.products
            .iter()
            .position(|product| &product.id == id)
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&mut self) -> Result<Vec<Product>, RemoteError> {
        Ok(self.products.clone())
    }

    async fn get_one(&mut self, id: &ProductId) -> Result<Product, RemoteError> {
        let index = self.position(id)?;
        Ok(self.products[index].clone())
    }

    async fn create(&mut self, fields: ProductFields) -> Result<Product, RemoteError> {
        let id = self.next_id();
        let now = Utc::now();
        let mut product = Product::new(id, String::new(), String::new(), 0.0, 0);
        product.apply(fields);
        product.created_at = Some(now);
        product.updated_at = Some(now);
        self.products.push(product.clone());
        Ok(product)
    }

    async fn update(&mut self, id: &ProductId, fields: ProductFields) -> Result<Product, RemoteError> {
        let index = self.position(id)?;
        let product = &mut self.products[index];
        product.apply(fields);
        product.updated_at = Some(Utc::now());
        Ok(product.clone())
    }

    async fn remove(&mut self, id: &ProductId) -> Result<(), RemoteError> {
        let index = self.position(id)?;
        self.products.remove(index);
        Ok(())
    }
}
