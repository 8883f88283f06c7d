//! # SHA-512 Hashing
//!
//! The transaction family derives state addresses and payload digests from
//! SHA-512. Both are exchanged as lowercase hex strings.

use sha2::{Digest, Sha512};

/// SHA-512 hash output (512-bit).
pub type Hash512 = [u8; 64];

/// Hash data with SHA-512 (one-shot).
pub fn sha512(data: &[u8]) -> Hash512 {
    Sha512::digest(data).into()
}

/// Hash data with SHA-512 and return the 128-character lowercase hex digest.
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(sha512(data))
}
