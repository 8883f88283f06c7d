//! # Mock Ledger
//!
//! In-process stand-in for the ledger REST API. Submitted batches are
//! verified and applied synchronously by a real `TransactionProcessor`
//! against an `InMemoryStateContext`.
//!
//! Batch status is `COMMITTED` or `INVALID` once applied. A ledger created
//! with `MockLedger::stalled()` records batches but never applies them and
//! reports `PENDING` forever.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use prost::Message;
use serde_json::json;
use shared_types::{BatchList, Namespace, StorageAddress};
use we_01_state_store::InMemoryStateContext;
use we_02_transaction_processor::{TpProcessRequest, TransactionProcessor, WeTransactionHandler};

pub struct MockLedger {
    processor: TransactionProcessor,
    pub state: InMemoryStateContext,
    statuses: Mutex<HashMap<String, &'static str>>,
    pub status_polls: AtomicUsize,
    stalled: bool,
}

impl MockLedger {
    pub fn new() -> Arc<Self> {
        Self::build(false)
    }

    pub fn stalled() -> Arc<Self> {
        Self::build(true)
    }

    fn build(stalled: bool) -> Arc<Self> {
        let mut processor = TransactionProcessor::new();
        processor
            .add_handler(Box::new(WeTransactionHandler::new(&Namespace::we())))
            .expect("fresh processor accepts the we handler");
        Arc::new(Self {
            processor,
            state: InMemoryStateContext::new(),
            statuses: Mutex::new(HashMap::new()),
            status_polls: AtomicUsize::new(0),
            stalled,
        })
    }

    pub fn polls(&self) -> usize {
        self.status_polls.load(Ordering::SeqCst)
    }

    /// Serve on an ephemeral port, returning `host:port`.
    pub async fn serve(self: &Arc<Self>) -> String {
        let router = Router::new()
            .route("/batches", post(submit_batches))
            .route("/batch_statuses", get(batch_statuses))
            .route("/state/:address", get(state))
            .with_state(Arc::clone(self));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("bound address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock ledger server");
        });
        addr.to_string()
    }

    /// Apply one batch, returning its final status.
    fn apply(&self, batch: &shared_types::Batch) -> &'static str {
        if batch.verify().is_err() {
            return "INVALID";
        }
        for transaction in &batch.transactions {
            let Ok(request) = TpProcessRequest::from_transaction(transaction) else {
                return "INVALID";
            };
            match self.processor.process(&request, &self.state) {
                Ok(response) if response.is_ok() => {}
                _ => return "INVALID",
            }
        }
        "COMMITTED"
    }
}

async fn submit_batches(State(ledger): State<Arc<MockLedger>>, body: Bytes) -> Response {
    let Ok(batch_list) = BatchList::decode(body.as_ref()) else {
        return (StatusCode::BAD_REQUEST, "malformed batch list").into_response();
    };

    for batch in &batch_list.batches {
        let status = if ledger.stalled {
            "PENDING"
        } else {
            ledger.apply(batch)
        };
        ledger
            .statuses
            .lock()
            .expect("status lock")
            .insert(batch.header_signature.clone(), status);
    }

    let ids = batch_list.batch_ids().join(",");
    (
        StatusCode::ACCEPTED,
        Json(json!({ "link": format!("/batch_statuses?id={}", ids) })),
    )
        .into_response()
}

async fn batch_statuses(
    State(ledger): State<Arc<MockLedger>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    ledger.status_polls.fetch_add(1, Ordering::SeqCst);
    let id = params.get("id").cloned().unwrap_or_default();
    let status = ledger
        .statuses
        .lock()
        .expect("status lock")
        .get(&id)
        .copied()
        .unwrap_or("UNKNOWN");

    Json(json!({ "data": [{ "id": id, "status": status, "invalid_transactions": [] }] }))
        .into_response()
}

async fn state(State(ledger): State<Arc<MockLedger>>, Path(address): Path<String>) -> Response {
    let Some(address) = StorageAddress::parse(&address) else {
        return (StatusCode::BAD_REQUEST, "malformed address").into_response();
    };
    match ledger.state.raw(&address) {
        Some(data) => Json(json!({ "data": STANDARD.encode(data), "head": "0" })).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
