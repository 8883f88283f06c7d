//! REST API response types.

use serde::{Deserialize, Serialize};

/// Outcome of one REST call that reached the server.
///
/// Not-found is a normal answer here; every other non-2xx status is a
/// `ClientError::Status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerResponse {
    Found(String),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchStatus {
    Pending,
    Committed,
    Invalid,
    Unknown,
}

impl BatchStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, BatchStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidTransaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatusEntry {
    #[serde(default)]
    pub id: String,
    pub status: BatchStatus,
    #[serde(default)]
    pub invalid_transactions: Vec<InvalidTransaction>,
}

/// Body of `GET /batch_statuses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatusResponse {
    pub data: Vec<BatchStatusEntry>,
}

impl BatchStatusResponse {
    /// Status of the first (and only queried) batch.
    pub fn status(&self) -> Option<BatchStatus> {
        self.data.first().map(|entry| entry.status)
    }
}

/// Body of `GET /state/{address}`; `data` is base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    pub data: String,
}
