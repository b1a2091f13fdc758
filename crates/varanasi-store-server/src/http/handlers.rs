// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::atomic::Ordering;
use tracing::info;
use varanasi_store_api::{
    cart_lines, checkout_error_to_api, checkout_response, customer, ApiError, CheckoutRequest,
    HealthResponse, ProductResponse, ProductsResponse, ORDER_CONFIRMATION_MESSAGE,
};
use varanasi_store_checkout::checkout;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(err.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err)).into_response()
}

fn unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub(crate) async fn health_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = propagated_request_id(&headers, &state);
    let resp = Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: unix_millis(),
    })
    .into_response();
    with_request_id(resp, &request_id)
}

pub(crate) async fn products_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = propagated_request_id(&headers, &state);
    let resp = Json(ProductsResponse {
        products: state.catalog.products().to_vec(),
    })
    .into_response();
    with_request_id(resp, &request_id)
}

pub(crate) async fn product_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.catalog.find_by_id(&id) {
        Some(product) => {
            let resp = Json(ProductResponse {
                product: product.clone(),
            })
            .into_response();
            with_request_id(resp, &request_id)
        }
        None => {
            let resp = api_error_response(ApiError::product_not_found(&id, &request_id));
            with_request_id(resp, &request_id)
        }
    }
}

pub(crate) async fn checkout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<CheckoutRequest>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    // An unparseable body validates the same way as an empty one.
    let req = body.map(|Json(v)| v).unwrap_or_default();
    let lines = cart_lines(&req.items);
    let buyer = customer(&req.customer);
    match checkout(&state.catalog, &lines, &buyer, state.ids.as_ref()) {
        Ok(summary) => {
            info!(
                request_id = %request_id,
                order_id = %summary.order_id,
                items = summary.totals.items,
                grand_total = summary.totals.grand_total,
                "checkout accepted"
            );
            let payload = checkout_response(summary, &request_id, ORDER_CONFIRMATION_MESSAGE);
            let resp = (StatusCode::CREATED, Json(payload)).into_response();
            with_request_id(resp, &request_id)
        }
        Err(err) => {
            info!(request_id = %request_id, error = %err, "checkout rejected");
            let resp = api_error_response(checkout_error_to_api(err, &request_id));
            with_request_id(resp, &request_id)
        }
    }
}

pub(crate) async fn fallback_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = api_error_response(ApiError::route_not_found(&request_id));
    with_request_id(resp, &request_id)
}
