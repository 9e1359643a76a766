//! The shipment/order model a packing slip is rendered from.
//!
//! These are read-only snapshots of what the order platform holds. Field
//! names follow the platform's column names so JSON exports deserialize
//! without mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Store scope identifier. `StoreId(0)` is the admin/default scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub u32);

impl StoreId {
    pub const DEFAULT: StoreId = StoreId(0);

    /// Whether this is a concrete store view rather than the default scope.
    pub fn is_store_view(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub entity_id: u64,
    #[serde(default)]
    pub increment_id: String,
    #[serde(default)]
    pub store_id: StoreId,
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub entity_id: u64,
    pub increment_id: String,
    #[serde(with = "platform_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub shipping_description: String,
    #[serde(default)]
    pub payment: Payment,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_group_id: Option<u32>,
    pub billing_address: Address,
    pub shipping_address: Address,
    #[serde(default)]
    pub bold_order_comment: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub method_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub street: Vec<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country_id: String,
    #[serde(default)]
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Simple,
    Configurable,
    Bundle,
    Virtual,
    Downloadable,
    Grouped,
    #[serde(other)]
    Other,
}

impl ProductType {
    /// Configurable and bundle lines group child lines instead of being
    /// shipped themselves.
    pub fn is_composite(self) -> bool {
        matches!(self, ProductType::Configurable | ProductType::Bundle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: u64,
    pub order_id: u64,
    #[serde(default)]
    pub parent_item_id: Option<u64>,
    #[serde(default)]
    pub product_type: ProductType,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub qty_ordered: f64,
    #[serde(default)]
    pub product: Option<Product>,
}

impl OrderItem {
    pub fn has_parent(&self) -> bool {
        self.parent_item_id.is_some()
    }

    /// The option label of a select attribute on the ordered product.
    pub fn attribute_text(&self, code: &str) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(|p| p.attributes.get(code))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Accepts RFC 3339 as well as the platform's `YYYY-MM-DD HH:MM:SS` (UTC)
/// column format; always serializes RFC 3339.
mod platform_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const PLATFORM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, PLATFORM_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}
