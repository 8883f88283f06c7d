//! Private key files: one hex-encoded secp256k1 scalar, surrounding
//! whitespace ignored.

use std::path::Path;

use shared_crypto::Secp256k1KeyPair;

use crate::domain::errors::ClientError;

pub fn load_signer(path: &Path) -> Result<Secp256k1KeyPair, ClientError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ClientError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Secp256k1KeyPair::from_hex(contents.trim())?)
}
