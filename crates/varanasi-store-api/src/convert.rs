// SPDX-License-Identifier: Apache-2.0

use crate::dto::{CheckoutResponse, CustomerDto, CustomerEchoDto, OrderLineDto, TotalsDto};
use serde_json::Value;
use varanasi_store_checkout::{CartLine, Customer, OrderSummary};

/// Wire items to core cart lines. Each element is read leniently: a missing
/// or non-string id becomes the empty string, and a quantity that is not a
/// positive integer (wrong type, fraction, negative, out-of-range) becomes 0.
/// Checkout rejects both with the same aggregate invalid-item error, so a
/// per-item type mismatch surfaces as an invalid item rather than an empty
/// cart. Line count is preserved so the empty-cart check still fires first.
#[must_use]
pub fn cart_lines(items: &[Value]) -> Vec<CartLine> {
    items
        .iter()
        .map(|item| {
            let id = item.get("id").and_then(Value::as_str).unwrap_or_default();
            let quantity = item.get("quantity").and_then(Value::as_u64).unwrap_or(0);
            CartLine::new(id, quantity)
        })
        .collect()
}

/// Non-string contact fields collapse to empty or absent and fail the
/// required-contact check downstream.
#[must_use]
pub fn customer(dto: &CustomerDto) -> Customer {
    Customer {
        name: dto.name.as_str().unwrap_or_default().to_string(),
        email: dto.email.as_str().unwrap_or_default().to_string(),
        phone: dto.phone.as_str().map(str::to_string),
        address: dto.address.as_str().map(str::to_string),
    }
}

#[must_use]
pub fn checkout_response(
    summary: OrderSummary,
    request_id: &str,
    message: &str,
) -> CheckoutResponse {
    let lines = summary
        .lines
        .into_iter()
        .map(|line| OrderLineDto {
            product_id: line.product_id,
            name: line.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            currency: line.currency,
            line_total: line.line_total,
        })
        .collect();
    CheckoutResponse {
        order_id: summary.order_id.as_str().to_string(),
        request_id: request_id.to_string(),
        summary: lines,
        totals: TotalsDto {
            currency: summary.totals.currency,
            items: summary.totals.items,
            grand_total: summary.totals.grand_total,
        },
        customer: CustomerEchoDto {
            name: summary.customer.name,
            email: summary.customer.email,
            phone: summary.customer.phone,
            address: summary.customer.address,
        },
        message: message.to_string(),
    }
}
