//! # Client Flows
//!
//! `SubmissionClient` over HTTP against `MockLedger`.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use shared_crypto::Secp256k1KeyPair;
    use shared_types::Namespace;
    use we_03_submission_client::{
        BatchStatus, ClientConfig, ClientError, RestLedger, SubmissionClient,
    };

    use crate::integration::mock_ledger::MockLedger;

    fn client(base_url: String) -> SubmissionClient {
        let config = ClientConfig {
            poll_interval: Duration::from_millis(100),
            ..ClientConfig::default().with_base_url(base_url)
        };
        SubmissionClient::new(config, Some(Box::new(Secp256k1KeyPair::generate()))).unwrap()
    }

    #[tokio::test]
    async fn test_set_then_get_over_http() {
        let ledger = MockLedger::new();
        let client = client(ledger.serve().await);

        let response = client
            .set("2024-01-01T00", vec![1, 2], vec![10, 20], 0)
            .await
            .unwrap();
        assert!(response.contains("batch_statuses"));

        let data = client.require("2024-01-01T00").await.unwrap();
        assert_eq!(data, b"2024-01-01T00-1,2-10,20".to_vec());
    }

    #[tokio::test]
    async fn test_get_nonexistent_is_absent() {
        let ledger = MockLedger::new();
        let client = client(ledger.serve().await);

        assert_eq!(client.get("nonexistent").await.unwrap(), None);
        assert!(matches!(
            client.require("nonexistent").await.unwrap_err(),
            ClientError::NotOnLedger { .. }
        ));
    }

    #[tokio::test]
    async fn test_committed_batch_returns_promptly() {
        let ledger = MockLedger::new();
        let client = client(ledger.serve().await);

        let start = Instant::now();
        client.set("h1", vec![1], vec![10], 5).await.unwrap();

        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(ledger.polls(), 1);
    }

    #[tokio::test]
    async fn test_pending_batch_waits_out_budget() {
        let ledger = MockLedger::stalled();
        let client = client(ledger.serve().await);

        let start = Instant::now();
        let response = client.set("h1", vec![1], vec![10], 2).await.unwrap();
        let elapsed = start.elapsed();

        assert!(response.contains("batch_statuses"));
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(5));
        assert!(ledger.polls() >= 1);
        assert_eq!(client.get("h1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_batch_status_visible_after_submit() {
        let ledger = MockLedger::new();
        let client = client(ledger.serve().await);

        let batch = client.builder().build("h1", vec![1], vec![10]).unwrap();
        client.submit(&batch, 0).await.unwrap();

        assert_eq!(
            client.batch_status(&batch.batch_id, 0).await.unwrap(),
            BatchStatus::Committed
        );
    }

    #[tokio::test]
    async fn test_rejected_batch_still_returns_submission_response() {
        let ledger = MockLedger::new();
        let client = client(ledger.serve().await);

        // A payload that no longer matches its signed digest is rejected.
        let mut batch = client.builder().build("h1", vec![1], vec![10]).unwrap();
        let transaction = &mut batch.batch_list.batches[0].transactions[0];
        transaction.payload = b"h1-set-1-99".to_vec();

        let response = client.submit(&batch, 5).await.unwrap();
        assert!(response.contains("batch_statuses"));
        assert_eq!(
            client.batch_status(&batch.batch_id, 0).await.unwrap(),
            BatchStatus::Invalid
        );
        assert_eq!(client.get("h1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_only_client_cannot_set() {
        let ledger = MockLedger::new();
        let rest = RestLedger::new(ClientConfig::default().with_base_url(ledger.serve().await))
            .unwrap();
        let client = SubmissionClient::with_ledger(
            rest,
            &Namespace::we(),
            None,
            Duration::from_millis(100),
        );

        let err = client.set("h1", vec![1], vec![10], 0).await.unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
