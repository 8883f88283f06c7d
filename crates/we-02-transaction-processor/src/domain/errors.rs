use thiserror::Error;

/// Failures of the dispatcher itself, as opposed to a handler's verdict on a
/// transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessorError {
    /// No registered handler serves this family/version pair.
    #[error("No handler registered for family {family_name} version {family_version}")]
    NoHandler {
        family_name: String,
        family_version: String,
    },

    /// A handler for the same family/version is already registered.
    #[error("Handler for family {family_name} version {family_version} already registered")]
    DuplicateHandler {
        family_name: String,
        family_version: String,
    },
}
