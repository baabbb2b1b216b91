//! Pure data structures (DTOs) shared between the [`crate::gate`] collaborator
//! and the [`crate::resource`] adapter.

pub mod application;

pub use application::*;
