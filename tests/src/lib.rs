//! # We-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # builder → batch verification → processor → state store
//!     ├── mock_ledger.rs  # in-process REST ledger backed by the real processor
//!     └── client_flows.rs # SubmissionClient against the mock ledger
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p we-tests
//! cargo test -p we-tests integration::client_flows::
//! ```

pub mod integration;
