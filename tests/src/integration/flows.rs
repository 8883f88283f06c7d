//! # Integration Test Flows
//!
//! A batch produced by the client-side builder is verified and applied by
//! the ledger-side processor, and the resulting state is read back through
//! a fresh `StateStore`.

#[cfg(test)]
mod tests {
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{AddressCodec, Batch, Namespace};
    use we_01_state_store::{InMemoryStateContext, Record, RecordCodec, StateStore};
    use we_02_transaction_processor::{
        TpProcessRequest, TpProcessResponse, TpStatus, TransactionProcessor, WeTransactionHandler,
    };
    use we_03_submission_client::TransactionBuilder;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(
            &Namespace::we(),
            Some(Box::new(Secp256k1KeyPair::generate())),
        )
    }

    fn processor() -> TransactionProcessor {
        let mut processor = TransactionProcessor::new();
        processor
            .add_handler(Box::new(WeTransactionHandler::new(&Namespace::we())))
            .unwrap();
        processor
    }

    /// Verify `batch` and apply each of its transactions in order.
    fn apply(
        processor: &TransactionProcessor,
        context: &InMemoryStateContext,
        batch: &Batch,
    ) -> Vec<TpProcessResponse> {
        batch.verify().unwrap();
        batch
            .transactions
            .iter()
            .map(|transaction| {
                let request = TpProcessRequest::from_transaction(transaction).unwrap();
                processor.process(&request, context).unwrap()
            })
            .collect()
    }

    fn read(context: &InMemoryStateContext, name: &str) -> Option<Record> {
        let codec = AddressCodec::new(&Namespace::we());
        StateStore::new(context, &codec).get(name).unwrap()
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_set_then_get() {
        let processor = processor();
        let context = InMemoryStateContext::new();
        let signed = builder()
            .build("2024-01-01T00", vec![1, 2], vec![10, 20])
            .unwrap();

        let responses = apply(&processor, &context, &signed.batch_list.batches[0]);
        assert_eq!(responses, vec![TpProcessResponse::ok()]);

        let record = read(&context, "2024-01-01T00").unwrap();
        assert_eq!(record.id_list, vec![1, 2]);
        assert_eq!(record.consumption_list, vec![10, 20]);
    }

    #[test]
    fn test_get_nonexistent_is_absent() {
        let context = InMemoryStateContext::new();
        assert_eq!(read(&context, "nonexistent"), None);
    }

    #[test]
    fn test_second_set_overwrites_first() {
        let processor = processor();
        let context = InMemoryStateContext::new();
        let builder = builder();

        for (ids, consumptions) in [(vec![1, 2, 3], vec![10, 20, 30]), (vec![7], vec![70])] {
            let signed = builder.build("h1", ids, consumptions).unwrap();
            apply(&processor, &context, &signed.batch_list.batches[0]);
        }

        assert_eq!(read(&context, "h1"), Some(Record::new("h1", vec![7], vec![70])));
    }

    #[test]
    fn test_insertion_order_does_not_change_state_bytes() {
        let processor = processor();
        let builder = builder();
        let first = builder.build("h1", vec![1], vec![10]).unwrap();
        let second = builder.build("h2", vec![2], vec![20]).unwrap();

        let forward = InMemoryStateContext::new();
        apply(&processor, &forward, &first.batch_list.batches[0]);
        apply(&processor, &forward, &second.batch_list.batches[0]);

        let backward = InMemoryStateContext::new();
        apply(&processor, &backward, &second.batch_list.batches[0]);
        apply(&processor, &backward, &first.batch_list.batches[0]);

        assert_eq!(forward.snapshot(), backward.snapshot());
    }

    #[test]
    fn test_independent_names_in_distinct_buckets() {
        let processor = processor();
        let context = InMemoryStateContext::new();
        let builder = builder();

        for name in ["2024-01-01T00", "2024-01-01T01"] {
            let signed = builder.build(name, vec![1], vec![10]).unwrap();
            apply(&processor, &context, &signed.batch_list.batches[0]);
        }

        let snapshot = context.snapshot();
        assert_eq!(snapshot.len(), 2);
        for data in snapshot.values() {
            assert_eq!(RecordCodec::decode(data).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_tampered_payload_rejected_without_state_change() {
        let processor = processor();
        let context = InMemoryStateContext::new();
        let signed = builder().build("h1", vec![1], vec![10]).unwrap();

        let mut transaction = signed.batch_list.batches[0].transactions[0].clone();
        transaction.payload = b"h1-set-1-99999".to_vec();
        let request = TpProcessRequest::from_transaction(&transaction).unwrap();

        let response = processor.process(&request, &context).unwrap();
        assert_eq!(response.status, TpStatus::InvalidTransaction);
        assert!(context.snapshot().is_empty());
    }
}
