//! Requests routed to handlers and the responses returned to the ledger.

use std::fmt;

use prost::Message;
use shared_types::{ApplyError, ProtocolError, Transaction, TransactionHeader};

/// One transaction handed to the processor by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct TpProcessRequest {
    pub header: TransactionHeader,
    /// Serialized header exactly as signed.
    pub header_bytes: Vec<u8>,
    pub payload: Vec<u8>,
    /// Hex signature over `header_bytes`.
    pub signature: String,
}

impl TpProcessRequest {
    pub fn new(header: TransactionHeader, payload: Vec<u8>, signature: String) -> Self {
        let header_bytes = header.encode_to_vec();
        Self {
            header,
            header_bytes,
            payload,
            signature,
        }
    }

    pub fn from_transaction(transaction: &Transaction) -> Result<Self, ProtocolError> {
        Ok(Self {
            header: transaction.decode_header()?,
            header_bytes: transaction.header.clone(),
            payload: transaction.payload.clone(),
            signature: transaction.header_signature.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpStatus {
    Ok,
    InvalidTransaction,
    InternalError,
}

impl fmt::Display for TpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TpStatus::Ok => "OK",
            TpStatus::InvalidTransaction => "INVALID_TRANSACTION",
            TpStatus::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpProcessResponse {
    pub status: TpStatus,
    pub message: String,
}

impl TpProcessResponse {
    pub fn ok() -> Self {
        Self {
            status: TpStatus::Ok,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: TpStatus::InvalidTransaction,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == TpStatus::Ok
    }
}

impl From<Result<(), ApplyError>> for TpProcessResponse {
    fn from(result: Result<(), ApplyError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(ApplyError::InvalidTransaction(message)) => Self::invalid(message),
            Err(ApplyError::InternalError(message)) => Self {
                status: TpStatus::InternalError,
                message,
            },
        }
    }
}
