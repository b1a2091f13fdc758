// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct OrderId(String);

impl OrderId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Injected id capability: checkout itself stays deterministic and tests
/// supply a stub.
pub trait OrderIdSource: Send + Sync + 'static {
    fn next_order_id(&self) -> OrderId;
}

/// Production source: `<prefix>-<year>-<random 6-char suffix>`,
/// e.g. `IV-2026-A1B2C3`.
#[derive(Debug, Clone)]
pub struct SystemOrderIds {
    prefix: String,
}

impl SystemOrderIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl OrderIdSource for SystemOrderIds {
    fn next_order_id(&self) -> OrderId {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        OrderId(format!("{}-{}-{}", self.prefix, Utc::now().year(), suffix))
    }
}

/// Test source that hands out a fixed sequence of ids.
#[derive(Debug)]
pub struct FixedOrderIds {
    ids: Mutex<Vec<String>>,
}

impl FixedOrderIds {
    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids: Mutex::new(ids),
        }
    }
}

impl OrderIdSource for FixedOrderIds {
    fn next_order_id(&self) -> OrderId {
        let mut ids = self.ids.lock().unwrap_or_else(|p| p.into_inner());
        if ids.is_empty() {
            OrderId("IV-0000-FIXED0".to_string())
        } else {
            OrderId(ids.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_ids_match_prefix_year_suffix_shape() {
        let source = SystemOrderIds::new("IV");
        let id = source.next_order_id();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "IV");
        assert_eq!(parts[1].len(), 4);
        assert!(parts[1].bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn fixed_ids_are_consumed_in_order() {
        let source = FixedOrderIds::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(source.next_order_id().as_str(), "a");
        assert_eq!(source.next_order_id().as_str(), "b");
        assert_eq!(source.next_order_id().as_str(), "IV-0000-FIXED0");
    }
}
