//! # Ledger Port
//!
//! The three REST calls the client needs. Implementations return
//! `LedgerResponse::NotFound` for HTTP 404 and an error for any other
//! failure, leaving the caller to decide what absence means.

use async_trait::async_trait;
use shared_types::StorageAddress;

use crate::domain::errors::ClientError;
use crate::domain::types::LedgerResponse;

#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// `POST /batches` with a serialized `BatchList`.
    async fn post_batches(&self, body: Vec<u8>) -> Result<LedgerResponse, ClientError>;

    /// `GET /batch_statuses?id={batch_id}&wait={wait_secs}`.
    async fn get_batch_status(
        &self,
        batch_id: &str,
        wait_secs: u64,
    ) -> Result<LedgerResponse, ClientError>;

    /// `GET /state/{address}`.
    async fn get_state(&self, address: &StorageAddress) -> Result<LedgerResponse, ClientError>;
}
