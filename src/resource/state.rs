//! Local declarative state for an application resource instance.

use crate::model::Application;

/// The local state bag bound to one declared application block.
///
/// # Invariant
/// `id` equals the remote application's `name` after any successful read,
/// and stays `None` until the remote entity has been confirmed to exist.
/// The orchestration tool treats an id-less state as "resource absent".
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState {
    application: Application,
    id: Option<String>,
}

impl ResourceState {
    /// Creates state for a freshly declared, not-yet-created application.
    pub fn new(application: Application) -> Self {
        Self {
            application,
            id: None,
        }
    }

    /// The declared application block.
    pub fn application(&self) -> &Application {
        &self.application
    }

    /// The declared application name (the prospective external id).
    pub fn name(&self) -> &str {
        &self.application.name
    }

    /// The external id, if the remote entity has been confirmed.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Binds the external id after a successful read.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Unbinds the external id after a successful delete.
    pub fn clear_id(&mut self) {
        self.id = None;
    }
}
