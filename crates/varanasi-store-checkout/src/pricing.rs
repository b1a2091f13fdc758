// SPDX-License-Identifier: Apache-2.0

use crate::ids::OrderIdSource;
use crate::order::{CartLine, Customer, OrderLine, OrderSummary, OrderTotals};
use std::fmt::{Display, Formatter};
use varanasi_store_model::Catalog;

/// Client-input failures, surfaced synchronously and never retried. Each
/// variant maps to one wire error code so the caller can render a specific
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    EmptyCart,
    InvalidItem,
    InvalidCustomer,
}

impl Display for CheckoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCart => f.write_str("cart is empty"),
            Self::InvalidItem => f.write_str("one or more cart items are invalid"),
            Self::InvalidCustomer => f.write_str("customer name and email are required"),
        }
    }
}

impl std::error::Error for CheckoutError {}

/// Validates a cart against the catalog and prices it.
///
/// Validation short-circuits in a fixed order: empty cart, then item validity
/// (unknown product id or quantity < 1, reported as one aggregate failure),
/// then required customer contact fields. Only a fully valid cart is priced;
/// no partial summary is ever produced and no order id is generated on the
/// failure path.
pub fn checkout(
    catalog: &Catalog,
    lines: &[CartLine],
    customer: &Customer,
    ids: &dyn OrderIdSource,
) -> Result<OrderSummary, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    for line in lines {
        let known = catalog.find_by_id(&line.product_id).is_some();
        if !known || line.quantity < 1 {
            return Err(CheckoutError::InvalidItem);
        }
    }
    if !customer.has_required_contact() {
        return Err(CheckoutError::InvalidCustomer);
    }

    let mut priced = Vec::with_capacity(lines.len());
    let mut grand_total: u64 = 0;
    for line in lines {
        // Lookup cannot fail here; the validation pass above resolved it.
        let Some(product) = catalog.find_by_id(&line.product_id) else {
            return Err(CheckoutError::InvalidItem);
        };
        let line_total = product
            .price
            .checked_mul(line.quantity)
            .ok_or(CheckoutError::InvalidItem)?;
        grand_total = grand_total
            .checked_add(line_total)
            .ok_or(CheckoutError::InvalidItem)?;
        priced.push(OrderLine {
            product_id: product.id.as_str().to_string(),
            name: product.name.clone(),
            quantity: line.quantity,
            unit_price: product.price,
            currency: product.currency.clone(),
            line_total,
        });
    }

    // Currency is inherited from the first priced line and deliberately not
    // checked for cross-line consistency; the shipped dataset is
    // single-currency.
    let currency = priced
        .first()
        .map(|l| l.currency.clone())
        .unwrap_or_else(|| "INR".to_string());

    Ok(OrderSummary {
        order_id: ids.next_order_id(),
        totals: OrderTotals {
            currency,
            items: priced.len(),
            grand_total,
        },
        lines: priced,
        customer: customer.clone(),
    })
}
