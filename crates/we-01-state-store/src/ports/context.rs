use std::time::Duration;

use shared_types::StorageAddress;
use thiserror::Error;

/// A value held at one state address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub address: StorageAddress,
    pub data: Vec<u8>,
}

impl StateEntry {
    pub fn new(address: StorageAddress, data: Vec<u8>) -> Self {
        Self { address, data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Tried to access undeclared address {address}")]
    AuthorizationFailed { address: StorageAddress },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Address-keyed byte store provided by the ledger for one transaction.
///
/// Implementations must honour `timeout` and report `ContextError::Timeout`
/// rather than block past it.
pub trait StateContext: Send + Sync {
    /// Read the given addresses. Addresses with no value are omitted.
    fn get_state(
        &self,
        addresses: &[StorageAddress],
        timeout: Duration,
    ) -> Result<Vec<StateEntry>, ContextError>;

    /// Write the given entries, returning the addresses that were set.
    fn set_state(
        &self,
        entries: Vec<StateEntry>,
        timeout: Duration,
    ) -> Result<Vec<StorageAddress>, ContextError>;
}
