// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
    pub correlation_id: Option<String>,
}

/// Honors an externally supplied `x-request-id` (propagated unchanged into
/// response headers and payloads), otherwise mints one from the state seed.
#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    let correlation_id = headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string);

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| {
            let id = state
                .request_id_seed
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            format!("req-{id:016x}")
        });

    RequestTrace {
        request_id,
        correlation_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::sync::Arc;
    use varanasi_store_checkout::FixedOrderIds;

    fn state() -> AppState {
        AppState::new(
            Arc::new(crate::builtin_catalog().expect("builtin catalog")),
            Arc::new(FixedOrderIds::new(Vec::new())),
        )
    }

    #[test]
    fn extracts_supplied_request_and_correlation_ids() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("req-abc"));
        headers.insert("x-correlation-id", HeaderValue::from_static("corr-1"));

        let trace = extract_request_trace(&headers, &state());
        assert_eq!(trace.request_id, "req-abc");
        assert_eq!(trace.correlation_id.as_deref(), Some("corr-1"));
    }

    #[test]
    fn mints_sequential_ids_when_header_is_absent() {
        let state = state();
        let first = extract_request_trace(&HeaderMap::new(), &state);
        let second = extract_request_trace(&HeaderMap::new(), &state);
        assert!(first.request_id.starts_with("req-"));
        assert_ne!(first.request_id, second.request_id);
        assert_eq!(first.correlation_id, None);
    }

    #[test]
    fn blank_request_id_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("   "));
        let trace = extract_request_trace(&headers, &state());
        assert!(trace.request_id.starts_with("req-"));
    }
}
