//! Field contract for the declared application block.
//!
//! The hosting orchestration tool owns the schema *framework*; this module
//! only carries the per-field rules it plugs in:
//!
//! - `application` — string, required, name-validated
//! - `email` — string, required
//! - `permissions_read` / `permissions_write` / `permissions_execute` —
//!   ordered string lists, optional, default empty

use crate::model::Application;
use crate::resource::ResourceError;

const MAX_NAME_LEN: usize = 255;

/// Validates an application name before any network call.
///
/// Gate forwards the name into cloud-provider resource names, which reject
/// punctuation, so only ASCII alphanumerics are accepted.
pub fn validate_application_name(name: &str) -> Result<(), ResourceError> {
    if name.is_empty() {
        return Err(ResourceError::Validation(
            "application name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ResourceError::Validation(format!(
            "application name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(ResourceError::Validation(format!(
            "application name {:?} contains invalid character {:?}; only letters and digits are allowed",
            name, bad
        )));
    }
    Ok(())
}

/// Validates a whole declared application block.
pub fn validate_declaration(app: &Application) -> Result<(), ResourceError> {
    validate_application_name(&app.name)?;
    if app.email.is_empty() {
        return Err(ResourceError::Validation(
            "email is required".to_string(),
        ));
    }
    Ok(())
}
