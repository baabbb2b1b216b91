//! Error types for the application resource adapter.

use crate::gate::GateError;
use thiserror::Error;

/// Errors that can occur during a resource lifecycle operation.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The declared application block is invalid. Raised before any
    /// network call is made.
    #[error("invalid application declaration: {0}")]
    Validation(String),

    /// The Gate collaborator failed. Carries the collaborator's error
    /// unmodified, per the propagation policy: no retries, no recovery,
    /// the operation in progress is fatal.
    #[error("gate api error: {0}")]
    Api(#[from] GateError),
}
