//! # Spinnaker Application Resource
//!
//! > **A declarative lifecycle adapter for Spinnaker applications.**
//!
//! This crate implements the resource contract a Terraform-style
//! orchestration tool expects for managing Spinnaker applications through
//! the Gate API: Create, Read, Update, Delete, plus a side-effect-free
//! Exists probe.
//!
//! ## Design Philosophy
//!
//! The adapter is a pure translation layer. It owns no state, runs no
//! background work, and performs no retries: it validates a declared
//! application block, forwards it to Gate, and reconciles Gate's
//! authoritative answer back into the local state bag. All policy beyond
//! that (scheduling, diffing, error reporting to the user) belongs to the
//! hosting tool.
//!
//! ### 1. Explicit Dependency Injection
//! The Gate client is a constructor argument ([`gate::GateApi`] behind an
//! `Arc`), not an untyped handle smuggled through callback metadata. Swap
//! in [`gate::mock::MockGate`] and the whole lifecycle is testable without
//! a network.
//!
//! ### 2. Typed Absence
//! "Not found" is a first-class [`gate::GateError`] variant. The existence
//! probe pattern matches on it; nothing in this crate scrapes error
//! message text.
//!
//! ### 3. Observability
//! Every lifecycle operation opens a `tracing` span carrying the
//! application name. See [`runtime::setup_tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Collaborator ([`gate`])
//! The seam to Spinnaker's Gate service.
//! - **Role**: Hides HTTP behind the [`GateApi`](gate::GateApi) trait.
//! - **Key items**: [`HttpGateClient`](gate::HttpGateClient), [`GateError`](gate::GateError), [`MockGate`](gate::mock::MockGate).
//!
//! ### 2. The Adapter ([`resource`])
//! The five lifecycle operations and the local state bag.
//! - **Key items**: [`ApplicationResource`](resource::ApplicationResource), [`ResourceState`](resource::ResourceState).
//!
//! ### 3. The Data ([`model`])
//! Declared and remote application shapes, including the wire payloads.
//!
//! ### 4. The Plumbing ([`runtime`])
//! Tracing/logging setup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spinnaker_application_resource::gate::HttpGateClient;
//! use spinnaker_application_resource::model::Application;
//! use spinnaker_application_resource::resource::{ApplicationResource, ResourceState};
//! use std::sync::Arc;
//!
//! let gate = Arc::new(HttpGateClient::new("http://gate.spinnaker:8084")?);
//! let resource = ApplicationResource::new(gate);
//!
//! let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
//! resource.create(&mut state).await?;
//! assert_eq!(state.id(), Some("applicationA"));
//! ```

pub mod gate;
pub mod model;
pub mod resource;
pub mod runtime;
