//! Product inventory ledger
//!
//! An ordered, append-only collection of products. Names are not required to
//! be unique; exact lookups take the first match, which keeps duplicate names
//! permitted but ambiguous for later operations.

use super::errors::StoreError;

/// A single stocked product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub stock: u32,
    pub rate: f64,
}

/// The product ledger, in insertion order
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a new product. No uniqueness check is performed.
    pub fn add(&mut self, name: &str, stock: u32, rate: f64) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyField {
                field: "Product name",
            });
        }
        if rate <= 0.0 {
            return Err(StoreError::NonPositiveRate);
        }
        self.products.push(Product {
            name: name.to_string(),
            stock,
            rate,
        });
        Ok(())
    }

    /// Exact, case-sensitive lookup. First match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Case-insensitive substring search for the search page.
    ///
    /// An empty query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Sell `quantity` units of the first product matching `name`.
    ///
    /// The sale is all-or-nothing: insufficient stock rejects the whole
    /// request and leaves the stock untouched. Returns the remaining stock on
    /// success.
    pub fn sell(&mut self, name: &str, quantity: u32) -> Result<u32, StoreError> {
        if quantity == 0 {
            return Err(StoreError::ZeroQuantity);
        }
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::UnknownProduct {
                name: name.to_string(),
            })?;
        if product.stock < quantity {
            return Err(StoreError::InsufficientStock {
                name: name.to_string(),
                requested: quantity,
                available: product.stock,
            });
        }
        product.stock -= quantity;
        Ok(product.stock)
    }
}
