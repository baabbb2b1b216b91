//! # Application Resource Adapter
//!
//! The translation layer between a declared application block and the Gate
//! API: five lifecycle operations (create, read, update, delete, exists)
//! driven one at a time by the hosting orchestration tool.
//!
//! ## Key Types
//!
//! - [`ApplicationResource`]: The adapter; generic over the injected
//!   [`GateApi`](crate::gate::GateApi) client.
//! - [`ResourceState`]: The local state bag for one declared application.
//! - [`ResourceError`]: Validation and propagated collaborator errors.
//!
//! ## Architecture Note
//! The adapter holds no state of its own. Every operation takes the state
//! bag by reference, calls Gate, and reconciles the authoritative answer
//! back. Read and update are idempotent probes; only create and delete
//! mutate the remote system.

pub mod error;
pub mod schema;
pub mod state;

pub use error::ResourceError;
pub use state::ResourceState;

use crate::gate::{GateApi, GateError};
use crate::model::ApplicationRecord;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// The lifecycle adapter for Spinnaker applications.
///
/// # Dependency Injection
/// The Gate client is an explicit constructor argument, shared via `Arc` so
/// the orchestration tool can reuse one client handle across every resource
/// instance. Operations never reach for ambient configuration.
pub struct ApplicationResource<G: GateApi> {
    gate: Arc<G>,
}

impl<G: GateApi> Clone for ApplicationResource<G> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

impl<G: GateApi> ApplicationResource<G> {
    /// Creates an adapter around a shared Gate client handle.
    pub fn new(gate: Arc<G>) -> Self {
        Self { gate }
    }

    /// Creates the declared application remotely, then reads it back.
    ///
    /// The immediate read populates local state from the authoritative
    /// remote representation rather than trusting the declaration. Any
    /// collaborator failure (conflict, validation, network) is fatal to
    /// this operation; there is no retry.
    #[instrument(skip_all, fields(application = %state.name()))]
    pub async fn create(&self, state: &mut ResourceState) -> Result<(), ResourceError> {
        schema::validate_declaration(state.application())?;

        self.gate.create_application(state.application()).await?;
        info!("Application created");

        self.read(state).await?;
        Ok(())
    }

    /// Fetches the remote record and reconciles it into local state.
    ///
    /// Only the remote `name` is reconciled, into the external id; the
    /// fetched record is returned so callers can reconcile further fields
    /// themselves. Every fetch failure propagates, including `NotFound` —
    /// absence is only interpreted by [`exists`](Self::exists).
    #[instrument(skip_all, fields(application = %state.name()))]
    pub async fn read(&self, state: &mut ResourceState) -> Result<ApplicationRecord, ResourceError> {
        let record = self.gate.get_application(state.name()).await?;
        debug!(remote_name = %record.name, "Fetched application record");

        state.set_id(record.name.clone());
        Ok(record)
    }

    /// Reconciles local state against the remote record.
    ///
    /// Deliberately identical to [`read`](Self::read): no mutation call is
    /// made, so declared changes to email or permissions are not pushed
    /// upstream. See DESIGN.md for the decision record.
    #[instrument(skip_all, fields(application = %state.name()))]
    pub async fn update(&self, state: &mut ResourceState) -> Result<ApplicationRecord, ResourceError> {
        self.read(state).await
    }

    /// Deletes the remote application and unbinds the local id.
    ///
    /// No idempotent already-deleted handling: deleting an absent
    /// application surfaces whatever error Gate returns.
    #[instrument(skip_all, fields(application = %state.name()))]
    pub async fn delete(&self, state: &mut ResourceState) -> Result<(), ResourceError> {
        self.gate.delete_application(state.name()).await?;
        info!("Application deleted");

        state.clear_id();
        Ok(())
    }

    /// Side-effect-free probe for remote existence.
    ///
    /// - [`GateError::NotFound`] is absence, not an error.
    /// - A successful fetch with an empty name is treated as absent; Gate
    ///   can answer 200 with a hollow record for unknown applications.
    /// - Any other collaborator failure propagates.
    #[instrument(skip_all, fields(application = %state.name()))]
    pub async fn exists(&self, state: &ResourceState) -> Result<bool, ResourceError> {
        match self.gate.get_application(state.name()).await {
            Ok(record) => {
                let present = !record.name.is_empty();
                debug!(present, "Existence probe answered");
                Ok(present)
            }
            Err(GateError::NotFound(_)) => {
                debug!("Existence probe: not found");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
