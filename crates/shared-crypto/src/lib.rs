//! # Shared Crypto - Signing and Hashing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-512 | State addresses, payload digests |
//! | `ecdsa` | secp256k1 | Transaction and batch header signing |
//! | `signer` | - | Black-box signing identity used by the transaction builder |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalized output
//! - Signatures are computed over the SHA-256 digest of the header bytes
//! - Private key material read from hex is zeroized after parsing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod signer;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use hashing::{sha512, sha512_hex};
pub use signer::{verify_hex, Signer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
