use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::secret_source::MockClientSecretSource;
use super::*;

#[tokio::test(start_paused = true)]
async fn missing_container_halts_immediately() {
    let source = Arc::new(MockClientSecretSource::new());

    let state = run::<MockWidgetContainer>(None, source).await;

    assert_eq!(state, BootstrapState::WaitingForContainer);
}

#[tokio::test(start_paused = true)]
async fn polling_stops_permanently_after_attempt_ceiling() {
    let mut container = MockWidgetContainer::new();
    container
        .expect_is_upgraded()
        .times(MAX_ATTEMPTS as usize)
        .return_const(false);
    container.expect_set_options().times(0);

    // A source with no expectations panics if the callback ever fires.
    let source = Arc::new(MockClientSecretSource::new());

    let state = run(Some(&container), source).await;

    assert_eq!(state, BootstrapState::TimedOut);
}

#[tokio::test(start_paused = true)]
async fn configures_once_when_upgrade_appears_mid_polling() {
    let mut seq = mockall::Sequence::new();
    let mut container = MockWidgetContainer::new();
    container
        .expect_is_upgraded()
        .times(3)
        .in_sequence(&mut seq)
        .return_const(false);
    container
        .expect_is_upgraded()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(true);

    let captured: Arc<Mutex<Option<WidgetOptions>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&captured);
    container
        .expect_set_options()
        .times(1)
        .returning(move |options| {
            *slot.lock().unwrap() = Some(options);
        });

    let mut source = MockClientSecretSource::new();
    source
        .expect_client_secret()
        .times(2)
        .returning(|| Ok("abc123".to_string()));

    let state = run(Some(&container), Arc::new(source)).await;
    assert_eq!(state, BootstrapState::Configured);

    // One endpoint request per callback invocation, enforced by times(2).
    let options = captured.lock().unwrap().take().expect("options installed");
    assert_eq!((options.get_client_secret)().await.unwrap(), "abc123");
    assert_eq!((options.get_client_secret)().await.unwrap(), "abc123");
}

#[tokio::test(start_paused = true)]
async fn callback_propagates_endpoint_failure_to_the_widget() {
    let mut container = MockWidgetContainer::new();
    container.expect_is_upgraded().times(1).return_const(true);

    let captured: Arc<Mutex<Option<WidgetOptions>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&captured);
    container
        .expect_set_options()
        .times(1)
        .returning(move |options| {
            *slot.lock().unwrap() = Some(options);
        });

    let mut source = MockClientSecretSource::new();
    source.expect_client_secret().times(1).returning(|| {
        Err(FetchError::Endpoint {
            status: 500,
            body: "broker down".to_string(),
        })
    });

    let state = run(Some(&container), Arc::new(source)).await;
    assert_eq!(state, BootstrapState::Configured);

    let options = captured.lock().unwrap().take().expect("options installed");
    let err = (options.get_client_secret)().await.expect_err("must fail");
    assert!(matches!(
        err,
        FetchError::Endpoint { status: 500, ref body } if body == "broker down"
    ));
}

#[tokio::test]
async fn session_endpoint_returns_the_relayed_client_secret() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "client_secret": "abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = SessionEndpoint::new(format!("{}/api/chat", server.uri()));

    let secret = endpoint.client_secret().await.expect("secret");
    assert_eq!(secret, "abc123");
}

#[tokio::test]
async fn session_endpoint_surfaces_backend_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("broker down"))
        .mount(&server)
        .await;

    let endpoint = SessionEndpoint::new(format!("{}/api/chat", server.uri()));

    let err = endpoint.client_secret().await.expect_err("must fail");
    assert!(matches!(
        err,
        FetchError::Endpoint { status: 500, ref body } if body == "broker down"
    ));
}
