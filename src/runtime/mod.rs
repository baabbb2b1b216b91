//! Runtime infrastructure shared by every consumer of the adapter.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use tracing::*;
