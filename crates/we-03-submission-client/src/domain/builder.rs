//! # Transaction Builder
//!
//! Turns `(name, ids, consumptions)` into a signed single-transaction batch:
//!
//! 1. payload `name-set-ids-consumptions`
//! 2. header declaring `address(name)` as sole input and output, carrying
//!    the payload's SHA-512 and a random nonce
//! 3. header signed by the signer, giving the transaction id
//! 4. batch header listing that id, signed by the same signer

use prost::Message;
use shared_crypto::{sha512_hex, Signer};
use shared_types::{
    AddressCodec, Batch, BatchHeader, BatchList, Namespace, Transaction, TransactionHeader,
    WePayload, FAMILY_NAME, FAMILY_VERSION,
};
use tracing::debug;

use super::errors::ClientError;

/// A batch list ready for `POST /batches`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedBatch {
    pub batch_list: BatchList,
    /// Header signature of the single batch, used for status queries.
    pub batch_id: String,
}

impl SignedBatch {
    pub fn to_bytes(&self) -> Vec<u8> {
        self.batch_list.encode_to_vec()
    }
}

pub struct TransactionBuilder {
    codec: AddressCodec,
    signer: Option<Box<dyn Signer>>,
}

impl TransactionBuilder {
    pub fn new(namespace: &Namespace, signer: Option<Box<dyn Signer>>) -> Self {
        Self {
            codec: AddressCodec::new(namespace),
            signer,
        }
    }

    pub fn codec(&self) -> &AddressCodec {
        &self.codec
    }

    /// Build and sign a `set` batch.
    pub fn build(
        &self,
        name: &str,
        id_list: Vec<u64>,
        consumption_list: Vec<u64>,
    ) -> Result<SignedBatch, ClientError> {
        let signer = self.signer.as_deref().ok_or_else(|| {
            ClientError::Configuration("a private key is required to submit transactions".into())
        })?;
        let payload = WePayload::set(name, id_list, consumption_list)?.to_bytes();

        let transaction = self.transaction(signer, name, payload);
        let batch = Self::batch(signer, vec![transaction]);
        let batch_id = batch.header_signature.clone();
        debug!(name, batch_id = %batch_id, "built batch");

        Ok(SignedBatch {
            batch_list: BatchList {
                batches: vec![batch],
            },
            batch_id,
        })
    }

    fn transaction(&self, signer: &dyn Signer, name: &str, payload: Vec<u8>) -> Transaction {
        let address = self.codec.address(name).into_string();
        let public_key = signer.public_key();

        let header = TransactionHeader {
            batcher_public_key: public_key.clone(),
            dependencies: Vec::new(),
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            inputs: vec![address.clone()],
            nonce: format!("{:#x}", rand::random::<u64>()),
            outputs: vec![address],
            payload_sha512: sha512_hex(&payload),
            signer_public_key: public_key,
        }
        .encode_to_vec();
        let header_signature = signer.sign(&header);

        Transaction {
            header,
            header_signature,
            payload,
        }
    }

    fn batch(signer: &dyn Signer, transactions: Vec<Transaction>) -> Batch {
        let header = BatchHeader {
            signer_public_key: signer.public_key(),
            transaction_ids: transactions
                .iter()
                .map(|t| t.header_signature.clone())
                .collect(),
        }
        .encode_to_vec();
        let header_signature = signer.sign(&header);

        Batch {
            header,
            header_signature,
            transactions,
            trace: false,
        }
    }
}
