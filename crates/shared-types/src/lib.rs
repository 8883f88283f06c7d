//! # Shared Types Crate
//!
//! Wire-level vocabulary of the `we` transaction family. Both sides of the
//! ledger (the transaction processor and the submitting client) depend on
//! this crate so that addresses, payloads and headers are produced and
//! consumed by exactly one implementation.
//!
//! ## Design Principles
//!
//! - **Explicit namespace**: the address prefix is a `Namespace` value built
//!   once and handed to an `AddressCodec`, never a process-wide global.
//! - **Typed payloads**: the `-`/`,` delimited payload string only exists at
//!   the `WePayload::to_bytes` / `WePayload::from_bytes` boundary.
//! - **Protocol compatibility**: protobuf field tags match the ledger's
//!   public transaction and batch schema.

pub mod address;
pub mod errors;
pub mod family;
pub mod int_list;
pub mod payload;
pub mod protocol;

pub use address::{AddressCodec, Namespace, StorageAddress};
pub use errors::*;
pub use family::*;
pub use int_list::IntListError;
pub use payload::{Action, PayloadError, WePayload};
pub use protocol::{Batch, BatchHeader, BatchList, ProtocolError, Transaction, TransactionHeader};
