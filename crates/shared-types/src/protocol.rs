//! # Transaction and Batch Messages
//!
//! Protobuf messages exchanged with the ledger. Field tags follow the
//! ledger's public schema so that a `BatchList` encoded here is accepted by
//! the REST `/batches` endpoint unchanged.
//!
//! ## Invariants
//!
//! - `Transaction.header_signature` verifies against `Transaction.header`
//!   under `TransactionHeader.signer_public_key`.
//! - `Batch.header_signature` verifies against `Batch.header`.
//! - `BatchHeader.transaction_ids` lists, in order, the `header_signature`
//!   of each transaction in the batch.

use prost::Message;
use shared_crypto::verify_hex;
use thiserror::Error;

/// Protocol-level integrity failures.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Failed to decode header: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Header signature does not verify for signer {signer}")]
    BadSignature { signer: String },

    #[error("Payload digest does not match header")]
    PayloadDigestMismatch,

    #[error("Batch transaction ids do not match the included transactions")]
    TransactionIdsMismatch,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransactionHeader {
    #[prost(string, tag = "1")]
    pub batcher_public_key: String,
    #[prost(string, repeated, tag = "2")]
    pub dependencies: Vec<String>,
    #[prost(string, tag = "3")]
    pub family_name: String,
    #[prost(string, tag = "4")]
    pub family_version: String,
    /// Addresses the transaction may read.
    #[prost(string, repeated, tag = "5")]
    pub inputs: Vec<String>,
    #[prost(string, tag = "6")]
    pub nonce: String,
    /// Addresses the transaction may write.
    #[prost(string, repeated, tag = "7")]
    pub outputs: Vec<String>,
    #[prost(string, tag = "9")]
    pub payload_sha512: String,
    #[prost(string, tag = "10")]
    pub signer_public_key: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
    /// Serialized `TransactionHeader`.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

impl Transaction {
    pub fn decode_header(&self) -> Result<TransactionHeader, ProtocolError> {
        Ok(TransactionHeader::decode(self.header.as_slice())?)
    }

    /// Check the header signature and the payload digest.
    pub fn verify(&self) -> Result<TransactionHeader, ProtocolError> {
        let header = self.decode_header()?;
        verify_hex(&header.signer_public_key, &self.header, &self.header_signature).map_err(
            |_| ProtocolError::BadSignature {
                signer: header.signer_public_key.clone(),
            },
        )?;
        if shared_crypto::sha512_hex(&self.payload) != header.payload_sha512 {
            return Err(ProtocolError::PayloadDigestMismatch);
        }
        Ok(header)
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct BatchHeader {
    #[prost(string, tag = "1")]
    pub signer_public_key: String,
    #[prost(string, repeated, tag = "2")]
    pub transaction_ids: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Batch {
    /// Serialized `BatchHeader`.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(message, repeated, tag = "3")]
    pub transactions: Vec<Transaction>,
    #[prost(bool, tag = "4")]
    pub trace: bool,
}

impl Batch {
    pub fn decode_header(&self) -> Result<BatchHeader, ProtocolError> {
        Ok(BatchHeader::decode(self.header.as_slice())?)
    }

    /// Check the batch signature, the transaction id list and every
    /// transaction's own signature.
    pub fn verify(&self) -> Result<BatchHeader, ProtocolError> {
        let header = self.decode_header()?;
        verify_hex(&header.signer_public_key, &self.header, &self.header_signature).map_err(
            |_| ProtocolError::BadSignature {
                signer: header.signer_public_key.clone(),
            },
        )?;

        let included = self.transactions.iter().map(|t| &t.header_signature);
        if !header.transaction_ids.iter().eq(included) {
            return Err(ProtocolError::TransactionIdsMismatch);
        }
        for transaction in &self.transactions {
            transaction.verify()?;
        }
        Ok(header)
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct BatchList {
    #[prost(message, repeated, tag = "1")]
    pub batches: Vec<Batch>,
}

impl BatchList {
    /// Batch ids (batch header signatures) in submission order.
    pub fn batch_ids(&self) -> Vec<String> {
        self.batches
            .iter()
            .map(|b| b.header_signature.clone())
            .collect()
    }
}
