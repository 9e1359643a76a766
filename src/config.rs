use crate::error::PipelineError;
use packslip_core::SlipOptions;
use packslip_traits::ScopeConfig;
use packslip_types::StoreId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Everything a packing-slip run can be configured with, loaded from JSON.
/// Every field is optional.
///
/// ```json
/// {
///   "options": { "weight_attribute": "bs_weight" },
///   "scope": {
///     "default": { "general/locale/timezone": "+01:00" },
///     "stores": { "1": { "sales/identity/logo": "default/logo.png" } }
///   },
///   "customer_groups": { "2": "Wholesale" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    pub options: SlipOptions,
    pub scope: ScopeSettings,
    /// Customer group codes by group id.
    pub customer_groups: BTreeMap<u32, String>,
}

impl SlipConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: SlipConfig = serde_json::from_str(json)?;
        if config.options.comment_wrap_width == 0 {
            return Err(PipelineError::Config(
                "comment_wrap_width must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Store-scoped settings: a default scope plus per-store overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSettings {
    pub default: BTreeMap<String, String>,
    pub stores: BTreeMap<u32, BTreeMap<String, String>>,
}

impl ScopeSettings {
    pub fn set_default(&mut self, path: &str, value: &str) {
        self.default.insert(path.to_string(), value.to_string());
    }

    pub fn set_store(&mut self, store: StoreId, path: &str, value: &str) {
        self.stores
            .entry(store.0)
            .or_default()
            .insert(path.to_string(), value.to_string());
    }
}

impl ScopeConfig for ScopeSettings {
    fn value(&self, path: &str, store: StoreId) -> Option<String> {
        self.stores
            .get(&store.0)
            .and_then(|values| values.get(path))
            .or_else(|| self.default.get(path))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_values_fall_back_to_default() {
        let mut scope = ScopeSettings::default();
        scope.set_default("sales/identity/logo", "default.png");
        scope.set_store(StoreId(2), "sales/identity/logo", "store2.png");
        scope.set_store(StoreId(2), "general/locale/timezone", "+02:00");

        assert_eq!(
            scope.value("sales/identity/logo", StoreId(2)).as_deref(),
            Some("store2.png")
        );
        assert_eq!(
            scope.value("sales/identity/logo", StoreId(1)).as_deref(),
            Some("default.png")
        );
        assert_eq!(scope.value("general/locale/timezone", StoreId::DEFAULT), None);
    }

    #[test]
    fn parses_full_config() {
        let config = SlipConfig::from_json(
            r#"{
                "options": {
                    "weight_attribute": "gewicht",
                    "labels": { "title": "Paklijst" }
                },
                "scope": {
                    "default": { "general/locale/timezone": "+01:00" },
                    "stores": { "3": { "sales/identity/logo": "nl/logo.png" } }
                },
                "customer_groups": { "2": "Wholesale" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.options.weight_attribute, "gewicht");
        assert_eq!(config.options.labels.title, "Paklijst");
        assert_eq!(config.options.labels.sku, "SKU");
        assert_eq!(
            config.scope.value("sales/identity/logo", StoreId(3)).as_deref(),
            Some("nl/logo.png")
        );
        assert_eq!(
            config.scope.value("general/locale/timezone", StoreId(3)).as_deref(),
            Some("+01:00")
        );
        assert_eq!(config.customer_groups.get(&2).map(String::as_str), Some("Wholesale"));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(SlipConfig::from_json("{}").unwrap(), SlipConfig::default());
    }

    #[test]
    fn zero_wrap_width_is_rejected() {
        assert!(matches!(
            SlipConfig::from_json(r#"{ "options": { "comment_wrap_width": 0 } }"#),
            Err(PipelineError::Config(_))
        ));
    }
}
