use serde::{Deserialize, Serialize};

/// A declared Spinnaker application.
///
/// # Resource Lifecycle
/// This is the desired-state half of the resource: what the user declared.
/// The authoritative remote half is [`ApplicationRecord`], fetched back from
/// Gate after every create or reconcile.
///
/// The `name` doubles as the external id and is immutable once the
/// application exists remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub permissions: Permissions,
}

impl Application {
    /// Creates a new application declaration with empty permission lists.
    ///
    /// # Arguments
    /// * `name` - Unique application name (also the external id)
    /// * `email` - Owner contact email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            permissions: Permissions::default(),
        }
    }

    /// Replaces the permission lists on this declaration.
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Access-control grants for an application.
///
/// Each list is an ordered sequence of principal identifiers (users or
/// groups). Gate serializes these under upper-case keys, so the wire names
/// are `READ` / `WRITE` / `EXECUTE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "READ", default)]
    pub read: Vec<String>,
    #[serde(rename = "WRITE", default)]
    pub write: Vec<String>,
    #[serde(rename = "EXECUTE", default)]
    pub execute: Vec<String>,
}

impl Permissions {
    pub fn is_empty(&self) -> bool {
        self.read.is_empty() && self.write.is_empty() && self.execute.is_empty()
    }
}

/// The authoritative application record returned by Gate.
///
/// Only the fields the adapter reconciles are modeled; Gate returns more
/// (cloud providers, description, user) but those are ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attributes: ApplicationAttributes,
}

/// Nested attribute block of an [`ApplicationRecord`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationAttributes {
    #[serde(default)]
    pub email: String,
}

/// Wire payload for creating an application.
///
/// Mirrors the JSON Gate accepts:
///
/// ```json
/// {
///   "application": "applicationA",
///   "email": "owner@example.com",
///   "permissions": {
///     "READ": ["com_sre_dev"],
///     "WRITE": ["com_sre_dev"],
///     "EXECUTE": ["com_sre_dev"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CreateApplicationPayload {
    pub application: String,
    pub email: String,
    pub permissions: Permissions,
}

impl From<&Application> for CreateApplicationPayload {
    fn from(app: &Application) -> Self {
        Self {
            application: app.name.clone(),
            email: app.email.clone(),
            permissions: app.permissions.clone(),
        }
    }
}
