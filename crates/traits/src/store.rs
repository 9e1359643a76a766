//! Store-scoped configuration and store environment switching.

use packslip_types::StoreId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Cannot emulate store {store}: {message}")]
    Emulation { store: StoreId, message: String },

    #[error("Invalid value for '{path}': '{value}' (expected {expected})")]
    InvalidValue {
        path: String,
        value: String,
        expected: &'static str,
    },
}

/// Store-scoped configuration lookup (`section/group/field` paths).
pub trait ScopeConfig {
    /// The value for `path` as seen from `store`, falling back to the default
    /// scope. `None` when neither scope sets it.
    fn value(&self, path: &str, store: StoreId) -> Option<String>;
}

/// The active store environment.
///
/// While a store is emulated, locale-sensitive lookups resolve against that
/// store. Implementations use interior mutability; the renderer only holds
/// a shared reference.
pub trait StoreEnvironment {
    fn start_emulation(&self, store: StoreId) -> Result<(), StoreError>;

    fn stop_emulation(&self);

    /// The emulated store, or `StoreId::DEFAULT` outside emulation.
    fn current_store(&self) -> StoreId;
}
