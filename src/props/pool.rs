//! Prop store pool
//!
//! Stores are drawn once per request and handed back when the response has
//! been produced. A returned store is cleared before it goes back on the free
//! list, so nothing from one request can leak into the next.

use super::store::PropStore;
use std::sync::{Mutex, PoisonError};

/// Free list of cleared prop stores
#[derive(Debug)]
pub struct StorePool {
    free: Mutex<Vec<PropStore>>,
    capacity: usize,
}

impl StorePool {
    /// Create a pool that keeps at most `capacity` idle stores
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take an idle store, or a fresh one if none is available
    pub fn acquire(&self) -> PropStore {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default()
    }

    /// Clear `store` and keep it for reuse, unless the pool is full
    pub fn release(&self, mut store: PropStore) {
        store.clear();
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        if free.len() < self.capacity {
            free.push(store);
        }
    }

    /// Number of stores waiting for reuse
    pub fn idle(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for StorePool {
    fn default() -> Self {
        Self::new(crate::shared::config::DEFAULT_POOL_CAPACITY)
    }
}
