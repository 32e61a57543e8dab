//! Best-score persistence
//!
//! The session reads the stored best once at construction and writes it
//! back only when a finished run beats it. Backends:
//! - `MemoryScoreStore`: in-process, for tests and headless runs
//! - `JsonFileStore`: `{"best": N}` on disk (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Storage for the all-time best score
pub trait ScoreStore {
    /// Stored best, or 0 if nothing has been stored yet
    fn load_best(&self) -> Result<u32, StoreError>;

    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best: u32,
}

/// Keeps the best score in memory; counts writes so callers can observe them
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn new(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = best;
        self.writes += 1;
        Ok(())
    }
}

/// Shares a store between the session and the code that created it
impl<S: ScoreStore> ScoreStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn load_best(&self) -> Result<u32, StoreError> {
        self.borrow().load_best()
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.borrow_mut().save_best(best)
    }
}
