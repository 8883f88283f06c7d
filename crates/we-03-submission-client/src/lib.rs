//! # we-03-submission-client
//!
//! Client side of the `we` transaction family.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): configuration, REST response types and
//!   the `TransactionBuilder` that turns a record into a signed batch
//! - **Ports Layer** (`ports/`): `LedgerApi`, the three REST calls the
//!   client makes
//! - **Adapters Layer** (`adapters/`): `RestLedger` (reqwest) and key file
//!   loading
//! - **Service Layer** (`client.rs`): `SubmissionClient`, which submits
//!   batches, waits for commitment and reads records back
//!
//! ```text
//! set:  TransactionBuilder ──SignedBatch──→ SubmissionClient ──POST /batches──→ ledger
//!                                                  └──GET /batch_statuses (poll)──→ ledger
//! get:  SubmissionClient ──GET /state/{address}──→ ledger
//! ```

pub mod adapters;
pub mod client;
pub mod domain;
pub mod ports;

pub use adapters::keys::load_signer;
pub use adapters::rest::RestLedger;
pub use client::SubmissionClient;
pub use domain::builder::{SignedBatch, TransactionBuilder};
pub use domain::config::{BasicAuth, ClientConfig};
pub use domain::errors::ClientError;
pub use domain::types::{BatchStatus, BatchStatusEntry, BatchStatusResponse, LedgerResponse, StateResponse};
pub use ports::ledger::LedgerApi;
