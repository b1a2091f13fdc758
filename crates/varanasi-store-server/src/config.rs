// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// Origins allowed by the CORS middleware. Empty means any origin is
    /// echoed back.
    pub cors_allowed_origins: Vec<String>,
    pub order_id_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1 << 20,
            cors_allowed_origins: Vec::new(),
            order_id_prefix: "IV".to_string(),
        }
    }
}
