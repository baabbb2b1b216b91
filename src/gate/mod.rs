//! # Gate Collaborator
//!
//! This module defines the seam between the resource adapter and Spinnaker's
//! Gate service.
//!
//! ## Key Types
//!
//! - [`GateApi`]: The trait every Gate client must implement.
//! - [`HttpGateClient`]: The real client, backed by `reqwest`.
//! - [`MockGate`](mock::MockGate): An expectation-driven mock for tests.
//! - [`GateError`]: Typed errors, including a first-class `NotFound`.
//!
//! ## Architecture Note
//! The adapter never talks HTTP directly; it only sees [`GateApi`]. That
//! keeps the lifecycle logic testable in isolation and makes the injected
//! client an explicit constructor argument rather than an untyped handle
//! smuggled through callback metadata.

pub mod error;
pub mod http;
pub mod mock;

pub use error::GateError;
pub use http::HttpGateClient;

use crate::model::{Application, ApplicationRecord};
use async_trait::async_trait;

/// The application-management surface of the Gate API.
///
/// All three operations are request/response with no internal retries;
/// every failure propagates to the caller as a [`GateError`].
#[async_trait]
pub trait GateApi: Send + Sync {
    /// Creates an application with the declared name, email, and permissions.
    async fn create_application(&self, app: &Application) -> Result<(), GateError>;

    /// Fetches the authoritative record for a named application.
    ///
    /// Absence is reported as [`GateError::NotFound`], never as a success
    /// with a sentinel body.
    async fn get_application(&self, name: &str) -> Result<ApplicationRecord, GateError>;

    /// Deletes the named application.
    async fn delete_application(&self, name: &str) -> Result<(), GateError>;
}
