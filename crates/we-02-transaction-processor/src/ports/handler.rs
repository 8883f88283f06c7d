//! # Handler Port
//!
//! A transaction family plugs into the processor by implementing
//! `TransactionHandler`. The processor only routes requests whose header
//! names one of the handler's family/version pairs.

use shared_types::ApplyError;
use we_01_state_store::StateContext;

use crate::domain::request::TpProcessRequest;

pub trait TransactionHandler: Send + Sync {
    fn family_name(&self) -> &str;

    fn family_versions(&self) -> Vec<String>;

    /// Address prefixes this family reads and writes.
    fn namespaces(&self) -> Vec<String>;

    /// Apply one transaction.
    ///
    /// `InvalidTransaction` must leave `context` untouched.
    fn apply(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError>;
}
