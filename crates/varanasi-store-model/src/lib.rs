// SPDX-License-Identifier: Apache-2.0

//! Domain types for the Varanasi Store catalog.
//!
//! The catalog is loaded once at process start and is read-only afterwards;
//! everything here is a plain value type with no I/O.

#![forbid(unsafe_code)]

mod catalog;
mod product;

pub use catalog::{Catalog, CatalogError};
pub use product::{Product, ProductId, ValidationError, ID_MAX_LEN, NAME_MAX_LEN};

pub const CRATE_NAME: &str = "varanasi-store-model";
