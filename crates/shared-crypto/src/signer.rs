//! Signing identity abstraction.
//!
//! The transaction builder only needs two things from an identity: a way to
//! sign header bytes and the public key that goes into `signer_public_key`.

use crate::{CryptoError, Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};

/// An identity capable of producing verifiable signatures over header bytes.
pub trait Signer: Send + Sync {
    /// Sign `message`, returning the hex-encoded signature.
    fn sign(&self, message: &[u8]) -> String;

    /// Hex-encoded public key identifying this signer.
    fn public_key(&self) -> String;
}

impl Signer for Secp256k1KeyPair {
    fn sign(&self, message: &[u8]) -> String {
        Secp256k1KeyPair::sign(self, message).to_hex()
    }

    fn public_key(&self) -> String {
        Secp256k1KeyPair::public_key(self).to_hex()
    }
}

/// Verify a hex signature over `message` against a hex public key.
pub fn verify_hex(public_key: &str, message: &[u8], signature: &str) -> Result<(), CryptoError> {
    let key = Secp256k1PublicKey::from_hex(public_key)?;
    let sig = Secp256k1Signature::from_hex(signature)?;
    key.verify(message, &sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signer_round_trip_through_hex() {
        let keypair = Secp256k1KeyPair::generate();
        let signer: &dyn Signer = &keypair;

        let signature = signer.sign(b"batch header");
        assert!(verify_hex(&signer.public_key(), b"batch header", &signature).is_ok());
        assert!(verify_hex(&signer.public_key(), b"other header", &signature).is_err());
    }

    #[test]
    fn test_verify_hex_rejects_garbage() {
        let keypair = Secp256k1KeyPair::generate();
        let public_key = Signer::public_key(&keypair);
        assert!(verify_hex(&public_key, b"m", "zz").is_err());
        assert!(verify_hex("02", b"m", &"00".repeat(64)).is_err());
    }
}
