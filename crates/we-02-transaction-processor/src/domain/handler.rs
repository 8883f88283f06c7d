//! # `we` Handler
//!
//! Validates a `set` payload and overwrites the named record.
//!
//! Each invocation performs exactly one record read and one record write
//! through a fresh `StateStore`, so nothing is cached between transactions.

use shared_types::{
    Action, AddressCodec, ApplyError, Namespace, WePayload, FAMILY_NAME, FAMILY_VERSION,
};
use tracing::{debug, info};
use we_01_state_store::{Record, StateContext, StateStore, StateStoreConfig};

use crate::domain::request::TpProcessRequest;
use crate::ports::handler::TransactionHandler;

pub struct WeTransactionHandler {
    codec: AddressCodec,
    config: StateStoreConfig,
}

impl WeTransactionHandler {
    pub fn new(namespace: &Namespace) -> Self {
        Self::with_config(namespace, StateStoreConfig::default())
    }

    pub fn with_config(namespace: &Namespace, config: StateStoreConfig) -> Self {
        Self {
            codec: AddressCodec::new(namespace),
            config,
        }
    }

    fn apply_set(&self, store: &mut StateStore<'_>, payload: WePayload) -> Result<(), ApplyError> {
        let previous = store.get(&payload.name)?;
        debug!(
            name = %payload.name,
            replacing = previous.is_some(),
            "applying set"
        );

        let record = Record::from(&payload);
        store.set(&payload.name, record)?;
        Ok(())
    }
}

impl Default for WeTransactionHandler {
    fn default() -> Self {
        Self::new(&Namespace::we())
    }
}

impl TransactionHandler for WeTransactionHandler {
    fn family_name(&self) -> &str {
        FAMILY_NAME
    }

    fn family_versions(&self) -> Vec<String> {
        vec![FAMILY_VERSION.to_string()]
    }

    fn namespaces(&self) -> Vec<String> {
        vec![self.codec.namespace().prefix().to_string()]
    }

    fn apply(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError> {
        let payload = WePayload::from_bytes(&request.payload)?;
        info!(
            signer = %request.header.signer_public_key,
            name = %payload.name,
            action = %payload.action,
            "applying transaction"
        );

        let mut store = StateStore::with_config(context, &self.codec, self.config);
        match payload.action {
            Action::Set => self.apply_set(&mut store, payload),
        }
    }
}
