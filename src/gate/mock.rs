//! # Mock Gate
//!
//! Utilities for testing the resource adapter in isolation.
//!
//! [`MockGate`] implements [`GateApi`] against a queue of expectations.
//! Set them up with the `expect_*` builders, run the adapter, then call
//! [`MockGate::verify`] to assert every expectation was consumed. Every
//! call is also recorded, so tests can assert *which* operations ran —
//! for example, that a reconcile issued no mutating call.

use crate::gate::{GateApi, GateError};
use crate::model::{Application, ApplicationRecord};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An expected request and the canned response to return for it.
enum Expectation {
    Create {
        response: Result<(), GateError>,
    },
    Get {
        name: String,
        response: Result<ApplicationRecord, GateError>,
    },
    Delete {
        name: String,
        response: Result<(), GateError>,
    },
}

/// A recorded call against the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum GateCall {
    Create(String),
    Get(String),
    Delete(String),
}

impl GateCall {
    /// True for calls that would change remote state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, GateCall::Get(_))
    }
}

/// A [`GateApi`] double with expectation tracking.
///
/// # Example
/// ```ignore
/// let mock = MockGate::new();
/// mock.expect_get("app1").return_ok(record);
///
/// // Run the adapter against &mock...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Default)]
pub struct MockGate {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<GateCall>>>,
}

impl MockGate {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `create_application` call.
    pub fn expect_create(&self) -> CreateExpectationBuilder {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_application` call for the given name.
    pub fn expect_get(&self, name: impl Into<String>) -> GetExpectationBuilder {
        GetExpectationBuilder {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete_application` call for the given name.
    pub fn expect_delete(&self, name: impl Into<String>) -> DeleteExpectationBuilder {
        DeleteExpectationBuilder {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Returns every call the mock has received so far.
    pub fn calls(&self) -> Vec<GateCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next_expectation(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }

    fn record(&self, call: GateCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GateApi for MockGate {
    async fn create_application(&self, app: &Application) -> Result<(), GateError> {
        self.record(GateCall::Create(app.name.clone()));
        match self.next_expectation() {
            Some(Expectation::Create { response }) => response,
            _ => panic!("Unexpected create_application({})", app.name),
        }
    }

    async fn get_application(&self, name: &str) -> Result<ApplicationRecord, GateError> {
        self.record(GateCall::Get(name.to_string()));
        match self.next_expectation() {
            Some(Expectation::Get {
                name: expected,
                response,
            }) if expected == name => response,
            _ => panic!("Unexpected get_application({})", name),
        }
    }

    async fn delete_application(&self, name: &str) -> Result<(), GateError> {
        self.record(GateCall::Delete(name.to_string()));
        match self.next_expectation() {
            Some(Expectation::Delete {
                name: expected,
                response,
            }) if expected == name => response,
            _ => panic!("Unexpected delete_application({})", name),
        }
    }
}

/// Builder for `create_application` expectations.
pub struct CreateExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CreateExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(()) });
    }

    /// Sets the expectation to fail with the given error.
    pub fn return_err(self, error: GateError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `get_application` expectations.
pub struct GetExpectationBuilder {
    name: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetExpectationBuilder {
    /// Sets the expectation to return the given record.
    pub fn return_ok(self, record: ApplicationRecord) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            name: self.name,
            response: Ok(record),
        });
    }

    /// Sets the expectation to fail with the given error.
    pub fn return_err(self, error: GateError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            name: self.name,
            response: Err(error),
        });
    }
}

/// Builder for `delete_application` expectations.
pub struct DeleteExpectationBuilder {
    name: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl DeleteExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                name: self.name,
                response: Ok(()),
            });
    }

    /// Sets the expectation to fail with the given error.
    pub fn return_err(self, error: GateError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                name: self.name,
                response: Err(error),
            });
    }
}
