use std::path::PathBuf;

use shared_crypto::CryptoError;
use shared_types::PayloadError;
use thiserror::Error;

/// Errors surfaced by the submission client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read private key {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to load private key: {0}")]
    InvalidKey(#[from] CryptoError),

    #[error(transparent)]
    Validation(#[from] PayloadError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Error {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("the date and hour: {name} is not part of the BlockChain")]
    NotOnLedger { name: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
