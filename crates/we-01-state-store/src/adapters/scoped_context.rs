//! Enforces the input/output address declarations of a transaction header.
//!
//! A declared entry authorizes every address it is a prefix of, so a
//! transaction may declare a whole namespace as well as single addresses.

use std::time::Duration;

use shared_types::StorageAddress;
use tracing::warn;

use crate::ports::{ContextError, StateContext, StateEntry};

pub struct ScopedContext<'a> {
    inner: &'a dyn StateContext,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl<'a> ScopedContext<'a> {
    pub fn new(inner: &'a dyn StateContext, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            inner,
            inputs,
            outputs,
        }
    }

    fn check(declared: &[String], address: &StorageAddress) -> Result<(), ContextError> {
        if declared
            .iter()
            .any(|prefix| address.as_str().starts_with(prefix.as_str()))
        {
            Ok(())
        } else {
            warn!(address = %address, "access to undeclared address");
            Err(ContextError::AuthorizationFailed {
                address: address.clone(),
            })
        }
    }
}

impl StateContext for ScopedContext<'_> {
    fn get_state(
        &self,
        addresses: &[StorageAddress],
        timeout: Duration,
    ) -> Result<Vec<StateEntry>, ContextError> {
        for address in addresses {
            Self::check(&self.inputs, address)?;
        }
        self.inner.get_state(addresses, timeout)
    }

    fn set_state(
        &self,
        entries: Vec<StateEntry>,
        timeout: Duration,
    ) -> Result<Vec<StorageAddress>, ContextError> {
        for entry in &entries {
            Self::check(&self.outputs, &entry.address)?;
        }
        self.inner.set_state(entries, timeout)
    }
}
