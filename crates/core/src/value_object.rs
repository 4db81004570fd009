//! Value objects: immutable, compared by value, validated on construction.
//!
//! `ItemName` and `Quantity` are the only two values the ledger is built from.
//! Both validate on construction, so a ledger holding them never needs to
//! re-check its inputs.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{LedgerError, LedgerResult};

/// Name of a stocked item. Never empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> LedgerResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::invalid("item must be a non-empty string"));
        }
        Ok(Self(name))
    }

    /// Parse an item name from untyped input. Anything but a JSON string is rejected.
    pub fn from_value(value: &JsonValue) -> LedgerResult<Self> {
        match value {
            JsonValue::String(s) => Self::parse(s.as_str()),
            other => Err(LedgerError::invalid(format!(
                "item must be a non-empty string, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative stock quantity.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a quantity from untyped input. Only non-negative JSON integers are accepted.
    pub fn from_value(value: &JsonValue) -> LedgerResult<Self> {
        match value {
            JsonValue::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Ok(Self(v))
                } else if n.is_i64() {
                    Err(LedgerError::invalid("quantity must be a non-negative integer"))
                } else {
                    Err(LedgerError::invalid(format!("quantity must be an integer, got {n}")))
                }
            }
            other => Err(LedgerError::invalid(format!(
                "quantity must be a non-negative integer, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| LedgerError::invalid("quantity must be a non-negative integer"))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
