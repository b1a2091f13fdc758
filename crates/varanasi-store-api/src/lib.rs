// SPDX-License-Identifier: Apache-2.0

//! Wire layer for the Varanasi Store API: camelCase DTOs, the error taxonomy
//! with request-id propagation, and conversions to and from the checkout core.
//! This crate has no HTTP dependency; the server maps status codes.

#![forbid(unsafe_code)]

mod convert;
mod dto;
mod error_mapping;
mod errors;

pub use convert::{cart_lines, checkout_response, customer};
pub use dto::{
    CheckoutRequest, CheckoutResponse, CustomerDto, CustomerEchoDto, HealthResponse,
    OrderLineDto, ProductResponse, ProductsResponse, TotalsDto,
};
pub use error_mapping::checkout_error_to_api;
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "varanasi-store-api";

/// Confirmation line returned with every successful checkout.
pub const ORDER_CONFIRMATION_MESSAGE: &str = "Thank you for choosing The IIT Varanasi Store. \
     A concierge will reach out shortly to confirm your order.";
