//! Shared application state for all routes.

use crate::store::CandyStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<CandyStore>>,
}

impl AppState {
    pub fn new(store: CandyStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Store operations never leave the sequence half-updated, so a poisoned lock is still usable.
    pub fn read(&self) -> RwLockReadGuard<'_, CandyStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, CandyStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
