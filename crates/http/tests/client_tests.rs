//! Integration tests for the Campus HTTP client

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use campus_core::{MemoryStore, SessionManager, User};
use campus_http::{CampusClient, ClientError};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_user() -> User {
    User {
        id: "1".into(),
        email: "a@b.com".into(),
        username: "ab".into(),
        first_name: "A".into(),
        last_name: "B".into(),
        is_active: true,
    }
}

fn session() -> Rc<SessionManager> {
    Rc::new(SessionManager::new(Box::new(MemoryStore::new())))
}

fn client_for(uri: &str, session: &Rc<SessionManager>) -> CampusClient {
    CampusClient::builder()
        .base_url(uri)
        .session(Rc::clone(session))
        .build()
        .unwrap()
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = CampusClient::builder().session(session()).build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_requires_session() {
    let result = CampusClient::builder().base_url("http://localhost:3000").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn bearer_token_attached_when_session_holds_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "email": "a@b.com",
            "username": "ab",
            "first_name": "A",
            "last_name": "B",
            "is_active": true
        })))
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");
    let client = client_for(&mock_server.uri(), &session);

    let user = client.me().await.unwrap();
    assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn no_authorization_header_without_a_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let session = session();
    let client = client_for(&mock_server.uri(), &session);

    let courses = client.list_courses().await.unwrap();
    assert!(courses.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn login_sends_form_encoded_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=a%40b.com&password=p"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok1",
            "refresh_token": "ref1",
            "token_type": "bearer",
            "user": {
                "id": "1",
                "email": "a@b.com",
                "username": "ab",
                "first_name": "A",
                "last_name": "B",
                "is_active": true
            }
        })))
        .mount(&mock_server)
        .await;

    let session = session();
    let client = client_for(&mock_server.uri(), &session);

    let token = client.login("a@b.com", "p").await.unwrap();
    assert_eq!(token.access_token, "tok1");
    assert_eq!(token.user.username, "ab");
}

#[tokio::test]
async fn writes_other_than_login_are_json_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/courses/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Algorithms",
            "code": "CS301",
            "semester": null,
            "year": null,
            "instructor": null,
            "description": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "name": "Algorithms",
            "code": "CS301",
            "semester": null,
            "year": null,
            "instructor": null,
            "description": null,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");
    let client = client_for(&mock_server.uri(), &session);

    let course = client
        .create_course(&campus_http::types::CourseCreate {
            name: "Algorithms".into(),
            code: Some("CS301".into()),
            semester: None,
            year: None,
            instructor: None,
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(course.id, "c1");
}

#[tokio::test]
async fn unauthorized_clears_session_once_and_never_retries() {
    let mock_server = MockServer::start().await;

    // expect(1) fails the test on drop if the client retried the request
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");

    let hook_fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hook_fired);
    let client = CampusClient::builder()
        .base_url(mock_server.uri())
        .session(Rc::clone(&session))
        .on_unauthorized(move || counter.set(counter.get() + 1))
        .build()
        .unwrap();

    let err = client.list_courses().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert!(err.is_auth_expired());

    let snapshot = session.snapshot();
    assert!(snapshot.user.is_none());
    assert!(snapshot.access_token.is_none());
    assert!(!snapshot.is_authenticated);
    assert_eq!(hook_fired.get(), 1);
}

#[tokio::test]
async fn non_401_failures_pass_through_with_session_intact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");

    let hook_fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hook_fired);
    let client = CampusClient::builder()
        .base_url(mock_server.uri())
        .session(Rc::clone(&session))
        .on_unauthorized(move || counter.set(counter.get() + 1))
        .build()
        .unwrap();

    let result = client.list_courses().await;
    assert!(matches!(
        result,
        Err(ClientError::Api { status: 503, .. })
    ));
    assert!(session.is_authenticated());
    assert_eq!(hook_fired.get(), 0);
}

#[tokio::test]
async fn timeout_surfaces_as_request_failure_not_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");
    let client = CampusClient::builder()
        .base_url(mock_server.uri())
        .session(Rc::clone(&session))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = client.list_courses().await;
    match result {
        Err(ClientError::Request(err)) => assert!(err.is_timeout()),
        other => panic!("expected a request failure, got {other:?}"),
    }
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn token_rotation_applies_to_subsequent_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/"))
        .and(header("authorization", "Bearer tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let session = session();
    session.set_auth(test_user(), "tok1", "ref1");
    session.set_auth(test_user(), "tok2", "ref2");
    let client = client_for(&mock_server.uri(), &session);

    assert!(client.list_courses().await.is_ok());
}
