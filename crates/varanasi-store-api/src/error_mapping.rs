// SPDX-License-Identifier: Apache-2.0

use crate::errors::{ApiError, ApiErrorCode};
use serde_json::Value;
use varanasi_store_checkout::CheckoutError;

/// Maps a core checkout failure to its wire error. The caller-supplied
/// request id is threaded through unchanged.
#[must_use]
pub fn checkout_error_to_api(err: CheckoutError, request_id: &str) -> ApiError {
    let (code, message) = match err {
        CheckoutError::EmptyCart => (
            ApiErrorCode::InvalidCart,
            "Your cart is empty. Please add products before checking out.",
        ),
        CheckoutError::InvalidItem => (
            ApiErrorCode::InvalidCartItem,
            "One or more cart items are invalid.",
        ),
        CheckoutError::InvalidCustomer => (
            ApiErrorCode::InvalidCustomer,
            "Customer name and email are required to complete checkout.",
        ),
    };
    ApiError::new(code, message, Value::Null, request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_checkout_error_maps_to_a_distinct_code() {
        let cases = [
            (CheckoutError::EmptyCart, ApiErrorCode::InvalidCart),
            (CheckoutError::InvalidItem, ApiErrorCode::InvalidCartItem),
            (CheckoutError::InvalidCustomer, ApiErrorCode::InvalidCustomer),
        ];
        for (err, code) in cases {
            let api = checkout_error_to_api(err, "req-1");
            assert_eq!(api.code, code);
            assert_eq!(api.request_id, "req-1");
            assert_eq!(api.code.http_status(), 400);
        }
    }

    #[test]
    fn request_id_passes_through_unchanged() {
        let api = checkout_error_to_api(CheckoutError::EmptyCart, "corr-xyz");
        assert_eq!(api.request_id, "corr-xyz");
    }
}
