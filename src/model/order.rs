use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a synthetic order.
///
/// Serializes untagged so the fixed/counter modes produce a bare JSON
/// number (the shape the downstream consumer already accepts) while the
/// token mode produces a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Token(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Token(t) => write!(f, "{}", t),
        }
    }
}

/// A synthetic purchase record sent to the test endpoint.
///
/// Orders are built fully populated immediately before each send,
/// serialized once, and discarded. Nothing mutates or retains them after
/// transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: u32,
    pub items: Vec<OrderItem>,
}

/// One food product within an [`Order`].
///
/// The attached properties always come from the vocabulary of the item's
/// category; see [`crate::generator::menu`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub properties: Vec<ItemProperty>,
}

/// A named attribute of an [`OrderItem`], scoped to its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperty {
    pub key: String,
    pub value: String,
}

impl ItemProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
