//! # Form Validation
//!
//! Turns the raw strings of a product form into a [`ProductFields`] payload, or
//! reports every field that fails. Nothing here touches the network: a draft that
//! fails validation is never submitted.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::model::{Category, Product, ProductFields};

/// Minimum trimmed length of a product name, in characters.
pub const MIN_NAME_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Price,
    Category,
    Stock,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Price, Field::Category, Field::Stock];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Category => "category",
            Field::Stock => "stock",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw, unvalidated contents of the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

impl ProductDraft {
    /// Seeds a draft from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Category => &self.category,
            Field::Stock => &self.stock,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Price => self.price = value,
            Field::Category => self.category = value,
            Field::Stock => self.stock = value,
        }
    }
}

/// Field name → message for every field that failed. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Returns every failing field of the draft.
pub fn check(draft: &ProductDraft) -> ValidationErrors {
    match validate(draft) {
        Ok(_) => ValidationErrors::default(),
        Err(errors) => errors,
    }
}

/// Validates a draft and normalizes it for submission.
///
/// On success the name is trimmed, the price is parsed as `f64` and the
/// category as a [`Category`] label. The stock must read as a number, but only
/// its leading whole digits count: `"7.9"` is 7, `"1e3"` is 1, `"-0.5"` is 0.
pub fn validate(draft: &ProductDraft) -> Result<ProductFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Product name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.insert(Field::Name, "Product name must be at least 3 characters long");
    }

    let price = match parse_number(&draft.price) {
        Number::Missing => {
            errors.insert(Field::Price, "Price is required");
            None
        }
        Number::Value(price) if price > 0.0 => Some(price),
        Number::Value(_) | Number::Invalid => {
            errors.insert(Field::Price, "Price must be a positive number");
            None
        }
    };

    let category = if draft.category.is_empty() {
        errors.insert(Field::Category, "Category is required");
        None
    } else {
        match draft.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.insert(Field::Category, "Please select a valid category");
                None
            }
        }
    };

    let stock = match parse_number(&draft.stock) {
        Number::Missing => {
            errors.insert(Field::Stock, "Stock quantity is required");
            None
        }
        Number::Value(_) => match integer_prefix(&draft.stock) {
            Some((true, digits)) if digits.bytes().any(|b| b != b'0') => {
                errors.insert(Field::Stock, "Stock must be a non-negative number");
                None
            }
            // digits only, so a parse failure is overflow
            Some((_, digits)) => match digits.parse::<u32>() {
                Ok(stock) => Some(stock),
                Err(_) => {
                    errors.insert(Field::Stock, "Stock quantity is too large");
                    None
                }
            },
            None => {
                errors.insert(Field::Stock, "Stock must be a non-negative number");
                None
            }
        },
        Number::Invalid => {
            errors.insert(Field::Stock, "Stock must be a non-negative number");
            None
        }
    };

    match (price, category, stock) {
        (Some(price), Some(category), Some(stock)) if errors.is_empty() => Ok(ProductFields {
            name: name.to_string(),
            price,
            category,
            stock,
        }),
        _ => Err(errors),
    }
}

enum Number {
    Missing,
    Invalid,
    Value(f64),
}

// NaN and infinities parse as f64 but are not numbers a form should accept.
fn parse_number(raw: &str) -> Number {
    let raw = raw.trim();
    if raw.is_empty() {
        return Number::Missing;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Number::Value(value),
        _ => Number::Invalid,
    }
}

/// Sign and leading decimal digits of a numeric string: `"7.9"` is `7`,
/// `"1e3"` is `1`, `"-0.5"` is `-0`. `None` when no digit leads.
fn integer_prefix(raw: &str) -> Option<(bool, &str)> {
    let raw = raw.trim();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    (end > 0).then(|| (negative, &rest[..end]))
}
