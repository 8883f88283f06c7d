//! # Error Types
//!
//! Outcome taxonomy shared by every transaction handler.

use thiserror::Error;

use crate::payload::PayloadError;

/// Errors a transaction handler reports back to the ledger.
///
/// `InvalidTransaction` rejects the transaction permanently and is never
/// retried. `InternalError` means the handler could not reach a verdict for
/// this invocation (state service unavailable, corrupt stored bytes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// Malformed or semantically invalid transaction.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Unrecoverable failure for the current invocation.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplyError {
    /// True when the transaction itself was at fault.
    pub fn is_invalid_transaction(&self) -> bool {
        matches!(self, ApplyError::InvalidTransaction(_))
    }
}

impl From<PayloadError> for ApplyError {
    fn from(err: PayloadError) -> Self {
        ApplyError::InvalidTransaction(err.to_string())
    }
}
