//! # Transaction Processor
//!
//! Dispatches ledger transactions to registered handlers.
//!
//! Before a handler runs, the processor checks that:
//! - the payload hashes to the header's `payload_sha512`
//! - the header signature verifies under the header's signer key
//!
//! The handler then sees state only through a `ScopedContext` limited to
//! the header's declared inputs and outputs.

use std::collections::HashMap;

use shared_crypto::{sha512_hex, verify_hex};
use tracing::{debug, warn};
use we_01_state_store::{ScopedContext, StateContext};

use crate::domain::errors::ProcessorError;
use crate::domain::request::{TpProcessRequest, TpProcessResponse};
use crate::ports::handler::TransactionHandler;

type RouteKey = (String, String);

#[derive(Default)]
pub struct TransactionProcessor {
    handlers: HashMap<RouteKey, usize>,
    registered: Vec<Box<dyn TransactionHandler>>,
}

impl TransactionProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every version it serves.
    pub fn add_handler(
        &mut self,
        handler: Box<dyn TransactionHandler>,
    ) -> Result<(), ProcessorError> {
        let family_name = handler.family_name().to_string();
        let versions = handler.family_versions();
        for family_version in &versions {
            if self
                .handlers
                .contains_key(&(family_name.clone(), family_version.clone()))
            {
                return Err(ProcessorError::DuplicateHandler {
                    family_name,
                    family_version: family_version.clone(),
                });
            }
        }

        let index = self.registered.len();
        for family_version in versions {
            debug!(family = %family_name, version = %family_version, "registered handler");
            self.handlers
                .insert((family_name.clone(), family_version), index);
        }
        self.registered.push(handler);
        Ok(())
    }

    fn route(&self, request: &TpProcessRequest) -> Result<&dyn TransactionHandler, ProcessorError> {
        let key = (
            request.header.family_name.clone(),
            request.header.family_version.clone(),
        );
        self.handlers
            .get(&key)
            .and_then(|index| self.registered.get(*index))
            .map(|handler| handler.as_ref())
            .ok_or(ProcessorError::NoHandler {
                family_name: key.0,
                family_version: key.1,
            })
    }

    /// Verify and apply one transaction against `context`.
    pub fn process(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<TpProcessResponse, ProcessorError> {
        let handler = self.route(request)?;

        if sha512_hex(&request.payload) != request.header.payload_sha512 {
            warn!("payload digest does not match header");
            return Ok(TpProcessResponse::invalid(
                "Payload digest does not match header",
            ));
        }
        if verify_hex(
            &request.header.signer_public_key,
            &request.header_bytes,
            &request.signature,
        )
        .is_err()
        {
            warn!(signer = %request.header.signer_public_key, "bad header signature");
            return Ok(TpProcessResponse::invalid(format!(
                "Header signature does not verify for signer {}",
                request.header.signer_public_key
            )));
        }

        let scoped = ScopedContext::new(
            context,
            request.header.inputs.clone(),
            request.header.outputs.clone(),
        );
        let response = TpProcessResponse::from(handler.apply(request, &scoped));
        debug!(status = %response.status, message = %response.message, "processed transaction");
        Ok(response)
    }
}
