use spinnaker_application_resource::gate::mock::{GateCall, MockGate};
use spinnaker_application_resource::gate::GateError;
use spinnaker_application_resource::model::{Application, ApplicationRecord, Permissions};
use spinnaker_application_resource::resource::{ApplicationResource, ResourceError, ResourceState};
use std::sync::Arc;

fn record(name: &str, email: &str) -> ApplicationRecord {
    serde_json::from_str(&format!(
        r#"{{"name": "{}", "attributes": {{"email": "{}"}}}}"#,
        name, email
    ))
    .unwrap()
}

fn adapter(mock: &Arc<MockGate>) -> ApplicationResource<MockGate> {
    ApplicationResource::new(mock.clone())
}

/// Create followed by its implicit read binds the local id to the declared
/// name, taken from the authoritative remote record.
#[tokio::test]
async fn create_then_read_binds_id_to_name() {
    let mock = Arc::new(MockGate::new());
    mock.expect_create().return_ok();
    mock.expect_get("applicationA")
        .return_ok(record("applicationA", "owner@example.com"));

    let app = Application::new("applicationA", "owner@example.com").with_permissions(
        Permissions {
            read: vec!["com_sre_dev".to_string()],
            write: vec!["com_sre_dev".to_string()],
            execute: vec!["com_sre_dev".to_string()],
        },
    );
    let mut state = ResourceState::new(app);

    adapter(&mock).create(&mut state).await.unwrap();

    assert_eq!(state.id(), Some("applicationA"));
    assert_eq!(
        mock.calls(),
        vec![
            GateCall::Create("applicationA".to_string()),
            GateCall::Get("applicationA".to_string()),
        ]
    );
    mock.verify();
}

/// A failed remote create is fatal: no follow-up read happens and no id is
/// assigned.
#[tokio::test]
async fn create_failure_propagates_without_read() {
    let mock = Arc::new(MockGate::new());
    mock.expect_create().return_err(GateError::Api {
        status: 409,
        message: "application already exists".to_string(),
    });

    let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
    let result = adapter(&mock).create(&mut state).await;

    assert!(matches!(result, Err(ResourceError::Api(_))));
    assert_eq!(state.id(), None);
    assert_eq!(mock.calls(), vec![GateCall::Create("applicationA".to_string())]);
    mock.verify();
}

/// Name validation runs before any network call.
#[tokio::test]
async fn invalid_name_fails_before_any_gate_call() {
    let mock = Arc::new(MockGate::new());
    let mut state = ResourceState::new(Application::new("my-app", "owner@example.com"));

    let result = adapter(&mock).create(&mut state).await;

    assert!(matches!(result, Err(ResourceError::Validation(_))));
    assert!(mock.calls().is_empty());
}

/// Read propagates every fetch failure, including NotFound; only the
/// existence probe interprets absence.
#[tokio::test]
async fn read_propagates_not_found() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA")
        .return_err(GateError::NotFound("applicationA".to_string()));

    let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
    let result = adapter(&mock).read(&mut state).await;

    assert!(matches!(
        result,
        Err(ResourceError::Api(GateError::NotFound(_)))
    ));
    assert_eq!(state.id(), None);
    mock.verify();
}

/// Update is reconcile-only: exactly one fetch, zero mutating calls, and
/// the remote record comes back for the caller to diff against.
#[tokio::test]
async fn update_issues_no_mutating_call() {
    let mock = Arc::new(MockGate::new());
    mock.expect_get("applicationA")
        .return_ok(record("applicationA", "owner@example.com"));

    let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
    let fetched = adapter(&mock).update(&mut state).await.unwrap();

    assert_eq!(fetched.attributes.email, "owner@example.com");
    assert_eq!(state.id(), Some("applicationA"));

    let calls = mock.calls();
    assert_eq!(calls, vec![GateCall::Get("applicationA".to_string())]);
    assert!(calls.iter().all(|c| !c.is_mutating()));
    mock.verify();
}

/// Delete removes the remote application and unbinds the local id; a
/// follow-up existence probe reports absence.
#[tokio::test]
async fn delete_then_exists_reports_absent() {
    let mock = Arc::new(MockGate::new());
    mock.expect_delete("applicationA").return_ok();
    mock.expect_get("applicationA")
        .return_err(GateError::NotFound("applicationA".to_string()));

    let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
    state.set_id("applicationA");

    let resource = adapter(&mock);
    resource.delete(&mut state).await.unwrap();
    assert_eq!(state.id(), None);

    let present = resource.exists(&state).await.unwrap();
    assert!(!present);
    mock.verify();
}

/// Delete has no already-deleted handling: remote failures propagate.
#[tokio::test]
async fn delete_failure_propagates() {
    let mock = Arc::new(MockGate::new());
    mock.expect_delete("applicationA").return_err(GateError::Api {
        status: 500,
        message: "front50 unavailable".to_string(),
    });

    let mut state = ResourceState::new(Application::new("applicationA", "owner@example.com"));
    state.set_id("applicationA");

    let result = adapter(&mock).delete(&mut state).await;

    assert!(matches!(result, Err(ResourceError::Api(_))));
    // The id stays bound: the delete did not take effect remotely.
    assert_eq!(state.id(), Some("applicationA"));
    mock.verify();
}
