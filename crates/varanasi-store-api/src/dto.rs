// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use varanasi_store_model::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductResponse {
    pub product: Product,
}

/// Checkout request body. Lenient on purpose: missing or wrong-typed fields
/// are kept as raw JSON and normalized during conversion, so a malformed cart
/// fails validation inside the core with a named error code instead of dying
/// at the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Raw cart items; each element is inspected field by field so one
    /// wrong-typed id or quantity is an invalid item, not an unreadable body.
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub customer: CustomerDto,
}

/// Raw customer fields. Non-string values normalize to absent during
/// conversion and fail the contact check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub phone: Value,
    #[serde(default)]
    pub address: Value,
}

/// Echo of the customer on a successful checkout; absent optional fields
/// serialize as explicit nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerEchoDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderLineDto {
    pub product_id: String,
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub currency: String,
    pub line_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TotalsDto {
    pub currency: String,
    pub items: usize,
    pub grand_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub request_id: String,
    pub summary: Vec<OrderLineDto>,
    pub totals: TotalsDto,
    pub customer: CustomerEchoDto,
    pub message: String,
}
