//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The event kind tag does not match any registered kind.
    #[error("unknown event kind: {0}")]
    UnknownKind(String),

    /// The event kind is known but its required variant data is absent.
    #[error("missing variant payload for kind {kind}: field {field} is absent")]
    MissingVariantPayload {
        /// The kind tag of the descriptor.
        kind: String,
        /// The descriptor field that was expected to be present.
        field: &'static str,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A failure reported by the external delivery backend.
    #[error("delivery error: {0}")]
    Delivery(String),
}
