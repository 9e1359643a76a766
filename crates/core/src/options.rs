//! Captions and tunables of the packing slip.

use crate::format::DEFAULT_DATE_FORMAT;
use crate::wrap::COMMENT_WRAP_WIDTH;
use serde::{Deserialize, Serialize};

/// Every fixed caption printed on the slip. Defaults are the Dutch texts
/// the slips have always carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    /// Prefix of the order number line, e.g. `Order: 100000123`.
    pub order_prefix: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub order_date: String,
    pub description: String,
    pub weight: String,
    pub article_code: String,
    pub sku: String,
    pub quantity: String,
    pub billing_address: String,
    pub contact: String,
    pub shipping_address: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Pakbon".into(),
            order_prefix: "Order: ".into(),
            shipping_method: "Verzendmethode".into(),
            payment_method: "Betaalmethode".into(),
            order_date: "Besteldatum".into(),
            description: "Beschrijving".into(),
            weight: "Gewicht".into(),
            article_code: "Artikelcode".into(),
            sku: "SKU".into(),
            quantity: "Aantal".into(),
            billing_address: "Factuuradres:".into(),
            contact: "Contact informatie:".into(),
            shipping_address: "Afleveradres:".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipOptions {
    pub labels: Labels,
    /// Product attribute whose option label fills the weight column.
    pub weight_attribute: String,
    pub comment_wrap_width: usize,
    /// strftime pattern for the order date.
    pub date_format: String,
}

impl Default for SlipOptions {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            weight_attribute: "bs_weight".into(),
            comment_wrap_width: COMMENT_WRAP_WIDTH,
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}
