// SPDX-License-Identifier: Apache-2.0

//! Cart validation and pricing.
//!
//! [`checkout`] takes the immutable catalog, the submitted cart lines, and the
//! customer's contact details, and either returns a fully priced
//! [`OrderSummary`] or the first failing validation as a [`CheckoutError`].
//! Nothing is persisted; order ids come from an injected [`OrderIdSource`] so
//! callers and tests control the only non-deterministic input.

#![forbid(unsafe_code)]

mod ids;
mod order;
mod pricing;

pub use ids::{FixedOrderIds, OrderId, OrderIdSource, SystemOrderIds};
pub use order::{CartLine, Customer, OrderLine, OrderSummary, OrderTotals};
pub use pricing::{checkout, CheckoutError};

pub const CRATE_NAME: &str = "varanasi-store-checkout";
