//! # Submission Client
//!
//! Submits signed batches and reads records back.
//!
//! ## Commit Wait
//!
//! With `wait_secs > 0`, `submit` polls the batch status until it leaves
//! `PENDING` or the wait budget runs out, polling at least once. It always
//! returns the submission response; a batch that ends `INVALID` is not an
//! error here. Callers that need the verdict query `batch_status` themselves.

use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shared_crypto::Signer;
use shared_types::Namespace;
use tracing::{debug, info};

use crate::adapters::rest::RestLedger;
use crate::domain::builder::{SignedBatch, TransactionBuilder};
use crate::domain::config::ClientConfig;
use crate::domain::errors::ClientError;
use crate::domain::types::{BatchStatus, BatchStatusResponse, LedgerResponse, StateResponse};
use crate::ports::ledger::LedgerApi;

pub struct SubmissionClient<L: LedgerApi = RestLedger> {
    ledger: L,
    builder: TransactionBuilder,
    poll_interval: Duration,
}

impl SubmissionClient<RestLedger> {
    /// Client talking to the REST API described by `config`.
    ///
    /// `signer` may be `None` for read-only use.
    pub fn new(config: ClientConfig, signer: Option<Box<dyn Signer>>) -> Result<Self, ClientError> {
        let poll_interval = config.poll_interval;
        let ledger = RestLedger::new(config)?;
        Ok(Self::with_ledger(ledger, &Namespace::we(), signer, poll_interval))
    }
}

impl<L: LedgerApi> SubmissionClient<L> {
    pub fn with_ledger(
        ledger: L,
        namespace: &Namespace,
        signer: Option<Box<dyn Signer>>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            ledger,
            builder: TransactionBuilder::new(namespace, signer),
            poll_interval,
        }
    }

    pub fn builder(&self) -> &TransactionBuilder {
        &self.builder
    }

    /// Build, sign and submit a `set` for `name`.
    pub async fn set(
        &self,
        name: &str,
        id_list: Vec<u64>,
        consumption_list: Vec<u64>,
        wait_secs: u64,
    ) -> Result<String, ClientError> {
        let batch = self.builder.build(name, id_list, consumption_list)?;
        self.submit(&batch, wait_secs).await
    }

    /// Post `batch`, then optionally wait for it to leave `PENDING`.
    pub async fn submit(&self, batch: &SignedBatch, wait_secs: u64) -> Result<String, ClientError> {
        let start = Instant::now();
        let response = match self.ledger.post_batches(batch.to_bytes()).await? {
            LedgerResponse::Found(body) => body,
            LedgerResponse::NotFound => return Err(not_found()),
        };
        info!(batch_id = %batch.batch_id, "batch submitted");

        if wait_secs == 0 {
            return Ok(response);
        }

        let budget = Duration::from_secs(wait_secs);
        loop {
            let remaining = wait_secs.saturating_sub(start.elapsed().as_secs());
            let status = self.batch_status(&batch.batch_id, remaining).await?;
            let elapsed = start.elapsed();
            debug!(batch_id = %batch.batch_id, ?status, ?elapsed, "polled batch status");

            if !status.is_pending() || elapsed >= budget {
                return Ok(response);
            }
            tokio::time::sleep(self.poll_interval.min(budget - elapsed)).await;
        }
    }

    /// Current status of `batch_id`, letting the server wait up to
    /// `wait_secs` for a change.
    pub async fn batch_status(
        &self,
        batch_id: &str,
        wait_secs: u64,
    ) -> Result<BatchStatus, ClientError> {
        let body = match self.ledger.get_batch_status(batch_id, wait_secs).await? {
            LedgerResponse::Found(body) => body,
            LedgerResponse::NotFound => return Err(not_found()),
        };
        let parsed: BatchStatusResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;
        parsed
            .status()
            .ok_or_else(|| ClientError::Parse("batch status response has no entries".into()))
    }

    /// Stored bucket bytes at `name`'s address, or `None` when the ledger
    /// has nothing there.
    pub async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, ClientError> {
        let address = self.builder.codec().address(name);
        let body = match self.ledger.get_state(&address).await? {
            LedgerResponse::Found(body) => body,
            LedgerResponse::NotFound => {
                debug!(name, address = %address, "no state at address");
                return Ok(None);
            }
        };
        let parsed: StateResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;
        let data = STANDARD
            .decode(parsed.data.as_bytes())
            .map_err(|e| ClientError::Parse(format!("state data is not base64: {}", e)))?;
        Ok(Some(data))
    }

    /// Like `get`, but absence is `ClientError::NotOnLedger`.
    pub async fn require(&self, name: &str) -> Result<Vec<u8>, ClientError> {
        self.get(name).await?.ok_or_else(|| ClientError::NotOnLedger {
            name: name.to_string(),
        })
    }
}

fn not_found() -> ClientError {
    ClientError::Status {
        status: 404,
        reason: "Not Found".into(),
    }
}
