// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use varanasi_store_checkout::SystemOrderIds;
use varanasi_store_model::Catalog;
use varanasi_store_server::{build_router, builtin_catalog, ApiConfig, AppState};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("STORE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_catalog() -> Result<Catalog, String> {
    match env::var("STORE_CATALOG_PATH") {
        Ok(path) => {
            let path = PathBuf::from(path);
            let bytes = std::fs::read(&path)
                .map_err(|e| format!("failed to read catalog {}: {e}", path.display()))?;
            Catalog::from_json_slice(&bytes)
                .map_err(|e| format!("invalid catalog {}: {e}", path.display()))
        }
        Err(_) => builtin_catalog().map_err(|e| format!("builtin catalog invalid: {e}")),
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("STORE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let catalog = load_catalog()?;
    info!(products = catalog.len(), "catalog loaded");
    if !catalog.currency_is_uniform() {
        warn!("catalog mixes currencies; totals inherit the first priced line's currency");
    }

    let api_cfg = ApiConfig {
        max_body_bytes: env_usize("STORE_MAX_BODY_BYTES", ApiConfig::default().max_body_bytes),
        cors_allowed_origins: env_list("STORE_CORS_ALLOWED_ORIGINS"),
        order_id_prefix: env::var("STORE_ORDER_ID_PREFIX").unwrap_or_else(|_| "IV".to_string()),
    };
    let ids = Arc::new(SystemOrderIds::new(api_cfg.order_id_prefix.clone()));
    let state = AppState::with_config(Arc::new(catalog), ids, api_cfg);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("varanasi-store listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            let drain_ms = env_u64("STORE_SHUTDOWN_DRAIN_MS", 2000);
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
