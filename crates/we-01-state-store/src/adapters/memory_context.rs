use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use shared_types::StorageAddress;

use crate::ports::{ContextError, StateContext, StateEntry};

/// In-memory implementation of StateContext for testing and local runs.
///
/// Counts the read and write calls it serves so callers can check how often
/// the remote store would have been hit.
pub struct InMemoryStateContext {
    entries: RwLock<BTreeMap<StorageAddress, Vec<u8>>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryStateContext {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// Raw bytes at `address`, bypassing the call counters.
    pub fn raw(&self, address: &StorageAddress) -> Option<Vec<u8>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(address).cloned())
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> BTreeMap<StorageAddress, Vec<u8>> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryStateContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StateContext for InMemoryStateContext {
    fn get_state(
        &self,
        addresses: &[StorageAddress],
        _timeout: Duration,
    ) -> Result<Vec<StateEntry>, ContextError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.read().map_err(|_| ContextError::LockPoisoned)?;
        Ok(addresses
            .iter()
            .filter_map(|address| {
                entries
                    .get(address)
                    .map(|data| StateEntry::new(address.clone(), data.clone()))
            })
            .collect())
    }

    fn set_state(
        &self,
        batch: Vec<StateEntry>,
        _timeout: Duration,
    ) -> Result<Vec<StorageAddress>, ContextError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ContextError::LockPoisoned)?;
        let mut written = Vec::with_capacity(batch.len());
        for entry in batch {
            written.push(entry.address.clone());
            entries.insert(entry.address, entry.data);
        }
        Ok(written)
    }
}
