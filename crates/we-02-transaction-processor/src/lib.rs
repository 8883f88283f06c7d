//! # we-02-transaction-processor
//!
//! Applies `we` transactions to ledger state.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): request/response types and the `we`
//!   handler (payload validation, record overwrite)
//! - **Ports Layer** (`ports/`): the `TransactionHandler` trait the
//!   dispatcher routes to
//! - **Service Layer** (`service.rs`): `TransactionProcessor`, which checks
//!   transaction integrity and dispatches by family name and version
//!
//! ## Outcomes
//!
//! Every processed transaction ends in exactly one of:
//! - `Ok`: the record was written
//! - `InvalidTransaction`: rejected, state untouched, never retried
//! - `InternalError`: the state service failed, the ledger may retry

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::ProcessorError;
pub use domain::handler::WeTransactionHandler;
pub use domain::request::{TpProcessRequest, TpProcessResponse, TpStatus};
pub use ports::handler::TransactionHandler;
pub use service::TransactionProcessor;
