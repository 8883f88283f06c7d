use std::time::Duration;

use shared_types::{ApplyError, StorageAddress};
use thiserror::Error;

use crate::ports::ContextError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("State {operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("State service error: {0}")]
    Transport(String),

    #[error("Address {address} is not declared by the transaction")]
    Unauthorized { address: StorageAddress },

    #[error("Failed to deserialize record data: {0}")]
    Deserialization(String),
}

impl StateError {
    fn from_context(err: ContextError, operation: &'static str) -> Self {
        match err {
            ContextError::Timeout(timeout) => StateError::Timeout { operation, timeout },
            ContextError::AuthorizationFailed { address } => StateError::Unauthorized { address },
            ContextError::Transport(reason) => StateError::Transport(reason),
            ContextError::LockPoisoned => StateError::Transport("state lock poisoned".into()),
        }
    }

    pub(crate) fn on_read(err: ContextError) -> Self {
        Self::from_context(err, "read")
    }

    pub(crate) fn on_write(err: ContextError) -> Self {
        Self::from_context(err, "write")
    }
}

impl From<StateError> for ApplyError {
    fn from(err: StateError) -> Self {
        match err {
            // Touching an undeclared address is the transaction's fault.
            StateError::Unauthorized { .. } => ApplyError::InvalidTransaction(err.to_string()),
            other => ApplyError::InternalError(other.to_string()),
        }
    }
}
