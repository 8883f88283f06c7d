//! # we-01-state-store
//!
//! State layer of the `we` transaction family.
//!
//! ## Role in System
//!
//! - **Two-level layout**: address → bucket → name → record. Every record
//!   name hashes to an address; all records whose names share an address are
//!   stored together as one bucket.
//! - **Canonical encoding**: a bucket serializes to the same bytes no matter
//!   the order its records were inserted, so every validator computes the
//!   same state root.
//! - **Read-through / write-through cache**: one `StateStore` per transaction
//!   invocation, reading each address from the ledger at most once.
//!
//! ```text
//! [TransactionHandler] ──get/set──→ [StateStore] ──get_state/set_state──→ [StateContext]
//!                                        │                                  (ledger)
//!                                        ├── AddressCodec (name → address)
//!                                        └── RecordCodec  (bucket ↔ bytes)
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
