//! Scoped store emulation.

use log::debug;
use packslip_traits::{StoreEnvironment, StoreError};
use packslip_types::StoreId;
use std::cell::Cell;
use std::collections::BTreeSet;

/// Keeps a store emulated for as long as it lives.
///
/// Emulation stops when the guard drops, so an error halfway through a page
/// still restores the default store.
pub struct EmulationGuard<'a> {
    env: &'a dyn StoreEnvironment,
}

impl<'a> EmulationGuard<'a> {
    pub fn start(env: &'a dyn StoreEnvironment, store: StoreId) -> Result<Self, StoreError> {
        env.start_emulation(store)?;
        debug!("Emulating store {}", store);
        Ok(Self { env })
    }
}

impl Drop for EmulationGuard<'_> {
    fn drop(&mut self) {
        self.env.stop_emulation();
        debug!("Stopped store emulation");
    }
}

/// In-process [`StoreEnvironment`] tracking the emulated store.
///
/// With a set of known stores, emulating anything else fails. Emulations do
/// not nest.
#[derive(Debug, Default)]
pub struct StoreEmulation {
    current: Cell<Option<StoreId>>,
    known: Option<BTreeSet<StoreId>>,
}

impl StoreEmulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known_stores(stores: impl IntoIterator<Item = StoreId>) -> Self {
        Self {
            current: Cell::new(None),
            known: Some(stores.into_iter().collect()),
        }
    }

    pub fn is_emulating(&self) -> bool {
        self.current.get().is_some()
    }
}

impl StoreEnvironment for StoreEmulation {
    fn start_emulation(&self, store: StoreId) -> Result<(), StoreError> {
        if let Some(active) = self.current.get() {
            return Err(StoreError::Emulation {
                store,
                message: format!("store {} is already being emulated", active),
            });
        }
        if let Some(known) = &self.known
            && !known.contains(&store)
        {
            return Err(StoreError::Emulation {
                store,
                message: "unknown store".into(),
            });
        }
        self.current.set(Some(store));
        Ok(())
    }

    fn stop_emulation(&self) {
        self.current.set(None);
    }

    fn current_store(&self) -> StoreId {
        self.current.get().unwrap_or(StoreId::DEFAULT)
    }
}
