//! Request-scoped read-through / write-through view of ledger state.

use std::collections::HashMap;
use std::time::Duration;

use shared_types::{AddressCodec, StorageAddress};
use tracing::debug;

use super::{Bucket, Record, RecordCodec, StateError};
use crate::ports::{StateContext, StateEntry};

/// Default bound on each call to the ledger state service.
pub const DEFAULT_STATE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateStoreConfig {
    pub timeout: Duration,
}

impl Default for StateStoreConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_STATE_TIMEOUT,
        }
    }
}

/// Record access for one transaction invocation.
///
/// Raw bytes of every address read or written are cached; `None` marks an
/// address known to be empty. A store must not outlive the invocation it was
/// created for.
pub struct StateStore<'a> {
    context: &'a dyn StateContext,
    codec: &'a AddressCodec,
    config: StateStoreConfig,
    cache: HashMap<StorageAddress, Option<Vec<u8>>>,
}

impl<'a> StateStore<'a> {
    pub fn new(context: &'a dyn StateContext, codec: &'a AddressCodec) -> Self {
        Self::with_config(context, codec, StateStoreConfig::default())
    }

    pub fn with_config(
        context: &'a dyn StateContext,
        codec: &'a AddressCodec,
        config: StateStoreConfig,
    ) -> Self {
        Self {
            context,
            codec,
            config,
            cache: HashMap::new(),
        }
    }

    /// The record stored under `name`, if any.
    pub fn get(&mut self, name: &str) -> Result<Option<Record>, StateError> {
        let bucket = self.bucket(name)?;
        Ok(bucket.get(name).cloned())
    }

    /// Store `record` under `name`, leaving other records in the bucket
    /// untouched.
    pub fn set(&mut self, name: &str, record: Record) -> Result<(), StateError> {
        let address = self.codec.address(name);
        let mut bucket = self.load(&address)?;
        bucket.insert(name, record);
        let data = RecordCodec::encode(&bucket);

        debug!(
            address = %address,
            records = bucket.len(),
            bytes = data.len(),
            "writing bucket"
        );
        self.context
            .set_state(
                vec![StateEntry::new(address.clone(), data.clone())],
                self.config.timeout,
            )
            .map_err(StateError::on_write)?;

        self.cache.insert(address, Some(data));
        Ok(())
    }

    /// Every record sharing `name`'s address.
    pub fn bucket(&mut self, name: &str) -> Result<Bucket, StateError> {
        let address = self.codec.address(name);
        self.load(&address)
    }

    fn load(&mut self, address: &StorageAddress) -> Result<Bucket, StateError> {
        if !self.cache.contains_key(address) {
            let entries = self
                .context
                .get_state(std::slice::from_ref(address), self.config.timeout)
                .map_err(StateError::on_read)?;
            let data = entries
                .into_iter()
                .find(|entry| &entry.address == address)
                .map(|entry| entry.data)
                .filter(|data| !data.is_empty());
            debug!(address = %address, found = data.is_some(), "read bucket");
            self.cache.insert(address.clone(), data);
        }

        match self.cache.get(address) {
            Some(Some(data)) => RecordCodec::decode(data),
            _ => Ok(Bucket::new()),
        }
    }
}
