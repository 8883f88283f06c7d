//! reqwest implementation of `LedgerApi`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};
use shared_types::{StorageAddress, BATCH_CONTENT_TYPE};
use tracing::debug;

use crate::domain::config::ClientConfig;
use crate::domain::errors::ClientError;
use crate::domain::types::LedgerResponse;
use crate::ports::ledger::LedgerApi;

/// Longest server-side wait requested in one status query. Longer budgets
/// are covered by polling again.
pub const MAX_STATUS_WAIT_SECS: u64 = 300;

pub struct RestLedger {
    client: Client,
    config: ClientConfig,
}

impl RestLedger {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(2))
            .build()?;
        Ok(Self { client, config })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth {
            Some(auth) => request.basic_auth(&auth.user, auth.password.as_ref()),
            None => request,
        }
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<LedgerResponse, ClientError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::Connection {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "ledger response");
        if status == StatusCode::NOT_FOUND {
            return Ok(LedgerResponse::NotFound);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(LedgerResponse::Found(response.text().await?))
    }
}

#[async_trait]
impl LedgerApi for RestLedger {
    async fn post_batches(&self, body: Vec<u8>) -> Result<LedgerResponse, ClientError> {
        let url = self.config.endpoint("batches");
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, BATCH_CONTENT_TYPE)
            .body(body);
        self.send(&url, request).await
    }

    async fn get_batch_status(
        &self,
        batch_id: &str,
        wait_secs: u64,
    ) -> Result<LedgerResponse, ClientError> {
        let url = self.config.endpoint("batch_statuses");
        let wait_secs = wait_secs.min(MAX_STATUS_WAIT_SECS);
        // The server holds the request open for up to `wait_secs`.
        let request = self
            .client
            .get(&url)
            .query(&[("id", batch_id.to_string()), ("wait", wait_secs.to_string())])
            .timeout(
                self.config
                    .request_timeout
                    .saturating_add(Duration::from_secs(wait_secs)),
            );
        self.send(&url, request).await
    }

    async fn get_state(&self, address: &StorageAddress) -> Result<LedgerResponse, ClientError> {
        let url = self.config.endpoint(&format!("state/{}", address));
        let request = self.client.get(&url);
        self.send(&url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::{get, post};
    use axum::Router;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("127.0.0.1:{}", addr.port())
    }

    fn ledger(base_url: String) -> RestLedger {
        RestLedger::new(ClientConfig::default().with_base_url(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_post_batches_sends_octet_stream() {
        let router = Router::new().route(
            "/batches",
            post(|headers: HeaderMap, body: axum::body::Bytes| async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                (
                    AxumStatus::ACCEPTED,
                    format!("{} {}", content_type, body.len()),
                )
            }),
        );
        let ledger = ledger(serve(router).await);

        let response = ledger.post_batches(vec![1, 2, 3]).await.unwrap();
        assert_eq!(
            response,
            LedgerResponse::Found("application/octet-stream 3".to_string())
        );
    }

    #[tokio::test]
    async fn test_batch_status_query_parameters() {
        let router = Router::new().route(
            "/batch_statuses",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                format!("{}/{}", params["id"], params["wait"])
            }),
        );
        let ledger = ledger(serve(router).await);

        let response = ledger.get_batch_status("abc", 4).await.unwrap();
        assert_eq!(response, LedgerResponse::Found("abc/4".to_string()));
    }

    #[tokio::test]
    async fn test_batch_status_wait_is_capped() {
        let router = Router::new().route(
            "/batch_statuses",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                params["wait"].clone()
            }),
        );
        let ledger = ledger(serve(router).await);

        let response = ledger.get_batch_status("abc", u64::MAX).await.unwrap();
        assert_eq!(
            response,
            LedgerResponse::Found(MAX_STATUS_WAIT_SECS.to_string())
        );
    }

    #[tokio::test]
    async fn test_not_found_and_error_statuses() {
        let router = Router::new()
            .route("/state/:address", get(|| async { AxumStatus::NOT_FOUND }))
            .route(
                "/batches",
                post(|| async { AxumStatus::SERVICE_UNAVAILABLE }),
            );
        let ledger = ledger(serve(router).await);

        let address = shared_types::AddressCodec::default().address("h1");
        assert_eq!(
            ledger.get_state(&address).await.unwrap(),
            LedgerResponse::NotFound
        );

        let err = ledger.post_batches(Vec::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "Error 503: Service Unavailable");
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let router = Router::new().route(
            "/state/:address",
            get(|headers: HeaderMap| async move {
                headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );
        let base_url = serve(router).await;
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_auth("user", Some("pass".to_string()));
        let ledger = RestLedger::new(config).unwrap();

        let address = shared_types::AddressCodec::default().address("h1");
        assert_eq!(
            ledger.get_state(&address).await.unwrap(),
            LedgerResponse::Found("Basic dXNlcjpwYXNz".to_string())
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let ledger = ledger(format!("http://127.0.0.1:{}", port));
        let err = ledger.post_batches(Vec::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::Connection { .. }));
    }
}
