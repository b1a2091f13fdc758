// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use varanasi_store_checkout::OrderIdSource;
use varanasi_store_model::{Catalog, CatalogError};

mod config;
mod http;
mod middleware;

pub use config::ApiConfig;

pub const CRATE_NAME: &str = "varanasi-store-server";

/// The dataset shipped with the binary; a file path from config overrides it.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json_slice(include_bytes!("../data/products.json"))
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ids: Arc<dyn OrderIdSource>,
    pub api: ApiConfig,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, ids: Arc<dyn OrderIdSource>) -> Self {
        Self::with_config(catalog, ids, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(
        catalog: Arc<Catalog>,
        ids: Arc<dyn OrderIdSource>,
        api: ApiConfig,
    ) -> Self {
        Self {
            catalog,
            ids,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(http::handlers::health_handler))
        .route("/api/products", get(http::handlers::products_handler))
        .route("/api/products/:id", get(http::handlers::product_handler))
        .route("/api/checkout", post(http::handlers::checkout_handler))
        .fallback(http::handlers::fallback_handler)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::cors::cors_middleware,
        ))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
