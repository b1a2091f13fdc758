// SPDX-License-Identifier: Apache-2.0

use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// One submitted (product id, quantity) pair. Quantities that were not
/// positive integers on the wire arrive here normalized to 0, which checkout
/// rejects the same way it rejects an unknown product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u64,
}

impl CartLine {
    #[must_use]
    pub fn new(product_id: impl Into<String>, quantity: u64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
        }
    }

    #[must_use]
    pub fn has_required_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// One priced line of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub currency: String,
    pub line_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub currency: String,
    pub items: usize,
    pub grand_total: u64,
}

/// The computed, non-persisted result of a successful checkout. Exists only in
/// the synchronous response; the order id is never stored or retrievable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    pub customer: Customer,
}
