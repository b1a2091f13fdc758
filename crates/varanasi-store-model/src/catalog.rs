// SPDX-License-Identifier: Apache-2.0

use crate::product::{Product, ValidationError};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    DuplicateId(String),
    InvalidProduct(String, ValidationError),
    Parse(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate product id: {id}"),
            Self::InvalidProduct(id, e) => write!(f, "invalid product {id}: {e}"),
            Self::Parse(msg) => write!(f, "catalog parse failed: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The static, read-only product list. Built once at startup; lookups are a
/// linear scan, which is fine at catalog scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, enforcing id uniqueness and per-product validity.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for product in &products {
            product.validate().map_err(|e| {
                CatalogError::InvalidProduct(product.id.as_str().to_string(), e)
            })?;
            if !seen.insert(product.id.as_str().to_string()) {
                return Err(CatalogError::DuplicateId(product.id.as_str().to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parses a JSON array of products and validates it.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_products(products)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// True when every product shares one currency. Checkout does not enforce
    /// this; the shipped dataset satisfies it and tests assert it.
    #[must_use]
    pub fn currency_is_uniform(&self) -> bool {
        let mut currencies = self.products.iter().map(|p| p.currency.as_str());
        match currencies.next() {
            Some(first) => currencies.all(|c| c == first),
            None => true,
        }
    }
}
