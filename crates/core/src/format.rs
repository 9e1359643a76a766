//! Text shown on the slip, derived from order fields.

use crate::error::SlipError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};
use packslip_traits::StoreError;
use packslip_types::Address;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_DATE_FORMAT: &str = "%A %d %b %Y";

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]+\)").expect("BUG: invalid PARENTHESIZED regex literal"));

/// Shipping descriptions read `Carrier - Method`; only the method is shown.
/// With more than one separator the second segment wins.
pub fn shipping_method_label(description: &str) -> &str {
    if description.contains(" - ") {
        description.split(" - ").nth(1).unwrap_or(description)
    } else {
        description
    }
}

/// Removes every non-empty parenthesized group, e.g. the provider suffix in
/// `iDEAL (via Mollie)`. Surrounding whitespace is left alone.
pub fn strip_parenthesized(title: &str) -> String {
    PARENTHESIZED.replace_all(title, "").into_owned()
}

/// Upper-cases the first character only.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn full_name(address: &Address) -> String {
    format!(
        "{} {}",
        capitalize_first(&address.firstname),
        capitalize_first(&address.lastname)
    )
}

pub fn street_line(address: &Address) -> String {
    address.street.join(" ")
}

pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The short article code printed in its own column.
pub fn sku_prefix(sku: &str) -> &str {
    truncate_chars(sku, 4)
}

/// Ordered quantity without decimals: `2.0000` prints as `2x`.
pub fn quantity_label(qty: f64) -> String {
    format!("{}x", qty.trunc() as i64)
}

/// Parses a store timezone written as a UTC offset (`+02:00`, `-0530`,
/// `UTC`). An unset value means UTC.
pub fn parse_utc_offset(path: &str, value: Option<&str>) -> Result<FixedOffset, StoreError> {
    let invalid = || StoreError::InvalidValue {
        path: path.to_string(),
        value: value.unwrap_or_default().to_string(),
        expected: "a UTC offset such as +01:00, -0530 or UTC",
    };

    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("utc") || raw == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, digits) = if let Some(rest) = raw.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// The order date in the store's timezone, e.g. `Monday 07 Oct 2024`.
pub fn format_order_date(
    created_at: DateTime<Utc>,
    offset: FixedOffset,
    format: &str,
) -> Result<String, SlipError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(SlipError::DateFormat(format.to_string()));
    }
    Ok(created_at
        .with_timezone(&offset)
        .format_with_items(StrftimeItems::new(format))
        .to_string())
}
