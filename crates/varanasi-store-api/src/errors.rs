// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Wire error codes. All are client-input errors except `Internal`; none are
/// retried and none are fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidCart,
    InvalidCartItem,
    InvalidCustomer,
    ProductNotFound,
    NotFound,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidCart | Self::InvalidCartItem | Self::InvalidCustomer => 400,
            Self::ProductNotFound | Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

/// Flat wire error payload:
/// `{"error": <code>, "message": ..., "requestId": ..., "details"?: ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(rename = "error")]
    pub code: ApiErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn product_not_found(id: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::ProductNotFound,
            format!("No product found for id {id}"),
            json!({"productId": id}),
            request_id,
        )
    }

    #[must_use]
    pub fn route_not_found(request_id: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            "We could not find the resource you requested.",
            Value::Null,
            request_id,
        )
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
    assert_traits::<ApiError>();
};
