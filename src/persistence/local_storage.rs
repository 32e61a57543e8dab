//! Browser LocalStorage best score
//!
//! Stored as a bare integer under the `best` key.

use super::ScoreStore;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "best";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable("LocalStorage not accessible"))
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(&self.key)
            .map_err(|_| StoreError::Unavailable("LocalStorage read failed"))?;
        // Unparseable values count as no record, matching a fresh install
        let best = value.and_then(|v| v.trim().parse().ok()).unwrap_or(0);
        log::info!("Loaded best score {best}");
        Ok(best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(&self.key, &best.to_string())
            .map_err(|_| StoreError::Unavailable("LocalStorage write failed"))?;
        log::info!("Best score {best} saved");
        Ok(())
    }
}
