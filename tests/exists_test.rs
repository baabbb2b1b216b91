use spinnaker_application_resource::gate::mock::MockGate;
use spinnaker_application_resource::gate::GateError;
use spinnaker_application_resource::model::{Application, ApplicationRecord};
use spinnaker_application_resource::resource::{ApplicationResource, ResourceError, ResourceState};
use std::sync::Arc;

fn probe_state(name: &str) -> ResourceState {
    ResourceState::new(Application::new(name, "owner@example.com"))
}

/// A typed NotFound from Gate is absence, not an error.
#[tokio::test]
async fn exists_treats_not_found_as_absent() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA")
        .return_err(GateError::NotFound("applicationA".to_string()));

    let resource = ApplicationResource::new(mock.clone());
    let present = resource.exists(&probe_state("applicationA")).await.unwrap();

    assert!(!present);
    mock.verify();
}

/// A successful fetch with a non-empty name means the application exists.
#[tokio::test]
async fn exists_true_on_named_record() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA").return_ok(ApplicationRecord {
        name: "applicationA".to_string(),
        ..Default::default()
    });

    let resource = ApplicationResource::new(mock.clone());
    let present = resource.exists(&probe_state("applicationA")).await.unwrap();

    assert!(present);
    mock.verify();
}

/// Gate can answer 200 with a hollow record for unknown applications; an
/// empty name counts as absent.
#[tokio::test]
async fn exists_false_on_empty_name() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA")
        .return_ok(ApplicationRecord::default());

    let resource = ApplicationResource::new(mock.clone());
    let present = resource.exists(&probe_state("applicationA")).await.unwrap();

    assert!(!present);
    mock.verify();
}

/// Any fetch failure other than NotFound propagates out of the probe.
#[tokio::test]
async fn exists_propagates_other_errors() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA").return_err(GateError::Api {
        status: 503,
        message: "gate unavailable".to_string(),
    });

    let resource = ApplicationResource::new(mock.clone());
    let result = resource.exists(&probe_state("applicationA")).await;

    assert!(matches!(
        result,
        Err(ResourceError::Api(GateError::Api { status: 503, .. }))
    ));
    mock.verify();
}

/// The probe never mutates local state; it takes the state bag by shared
/// reference and the id stays whatever it was.
#[tokio::test]
async fn exists_leaves_state_untouched() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA").return_ok(ApplicationRecord {
        name: "applicationA".to_string(),
        ..Default::default()
    });

    let mut state = probe_state("applicationA");
    state.set_id("applicationA");
    let before = state.clone();

    let resource = ApplicationResource::new(mock.clone());
    resource.exists(&state).await.unwrap();

    assert_eq!(state, before);
    mock.verify();
}
