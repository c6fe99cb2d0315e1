//! Domain error model.

use thiserror::Error;

/// Result type used across the dispatch domain.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Dispatch-level error.
///
/// Every variant is a local, deterministic failure. None of them is retried
/// internally; they propagate straight to the caller of the failing operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A required string or collection was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A consignment was offered to a batch that has already been closed.
    #[error("cannot add a consignment to a closed batch")]
    BatchClosed,

    /// The `(courier name, consignment id)` pair is already present in the batch.
    #[error("duplicate consignment id: {id} from courier: {courier_name}")]
    DuplicateConsignment { id: String, courier_name: String },
}

impl DispatchError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate(id: impl Into<String>, courier_name: impl Into<String>) -> Self {
        Self::DuplicateConsignment {
            id: id.into(),
            courier_name: courier_name.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
