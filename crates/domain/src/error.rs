//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomebaseError`] via `From`. Adapters box their storage errors so the
//! domain never names a database crate.

use std::num::ParseIntError;

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HomebaseError {
    /// Input did not satisfy a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed (connectivity, constraint, decoding).
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain rule violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An identifier could not be parsed from its textual form.
    #[error("invalid {kind} id {value:?}: {source}")]
    InvalidId {
        kind: &'static str,
        value: String,
        source: ParseIntError,
    },

    /// An identifier was numeric but not written in its plain form.
    #[error("invalid {kind} id {value:?}: unexpected sign")]
    NonCanonicalId { kind: &'static str, value: String },
}

/// No record of the given kind exists for the given id.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
