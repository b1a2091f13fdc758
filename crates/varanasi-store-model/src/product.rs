// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 128;
pub const NAME_MAX_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidValue(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidValue(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unique catalog key, e.g. `heritage-tee`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty("product_id"));
        }
        if input.trim() != input {
            return Err(ValidationError::Trimmed("product_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ValidationError::TooLong("product_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One purchasable record. Prices are whole currency units; `sizes`, `colors`,
/// `badges`, and `media_class` are presentation-only and optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub currency: String,
    pub category: String,
    pub collection: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_class: Option<String>,
}

impl Product {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Transparent deserialization skips the `ProductId` constructor, so
        // re-run its rules on records loaded from JSON.
        ProductId::parse(self.id.as_str())?;
        if self.name.is_empty() {
            return Err(ValidationError::Empty("product name"));
        }
        if self.name.len() > NAME_MAX_LEN {
            return Err(ValidationError::TooLong("product name", NAME_MAX_LEN));
        }
        if self.currency.is_empty() {
            return Err(ValidationError::Empty("product currency"));
        }
        if self.currency.trim() != self.currency {
            return Err(ValidationError::Trimmed("product currency"));
        }
        Ok(())
    }
}
