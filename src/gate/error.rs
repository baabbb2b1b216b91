//! Error types for the Gate collaborator.

use thiserror::Error;

/// Errors surfaced by a [`GateApi`](crate::gate::GateApi) implementation.
///
/// `NotFound` is a first-class variant rather than a substring buried in a
/// message: callers that care about absence (the `exists` probe) match on it
/// directly instead of scraping error text.
#[derive(Debug, Error)]
pub enum GateError {
    /// The named application does not exist on the Gate side.
    #[error("application not found: {0}")]
    NotFound(String),

    /// Gate answered with a non-success status.
    #[error("gate returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP transport failed before a response was produced.
    #[error("gate transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gate answered, but the body did not decode into the expected shape.
    #[error("failed to decode gate response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GateError {
    /// Classifies a non-success Gate response.
    ///
    /// Gate reports a missing application either as a 404 or as a 200/500
    /// with a "not found" message in the body, depending on the endpoint
    /// version. Both collapse into [`GateError::NotFound`] here, at the
    /// transport boundary, so nothing above it string-matches.
    pub fn from_response(status: u16, message: String, name: &str) -> Self {
        if status == 404 || message.to_ascii_lowercase().contains("not found") {
            GateError::NotFound(name.to_string())
        } else {
            GateError::Api { status, message }
        }
    }

    /// Returns true if this error signals that the application is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GateError::NotFound(_))
    }
}
