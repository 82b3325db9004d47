use serde_json::json;
use tempfile::TempDir;
use tracker_client::{
    ApiClient, ApiError, AuthContext, ClientConfig, ClientError, FileSessionStore,
    MemorySessionStore, Session, SessionStore,
};
use tracker_shared::dto::{UserResponse, WorkoutRequest};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_ID: &str = "6f1c2b8e-3d4a-4e5f-9a0b-1c2d3e4f5a6b";

fn user_json() -> serde_json::Value {
    json!({ "id": USER_ID, "name": "Ann", "email": "ann@x.com" })
}

fn auth_json(token: &str) -> serde_json::Value {
    json!({
        "token": token,
        "token_type": "Bearer",
        "expires_in": 86400,
        "user": user_json(),
    })
}

fn stored_session(token: &str) -> Session {
    Session {
        token: token.to_string(),
        user: UserResponse {
            id: Uuid::parse_str(USER_ID).unwrap(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        },
    }
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_error_detail_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "type": "about:blank",
            "title": "Conflict",
            "status": 409,
            "detail": "Email already registered",
        })))
        .mount(&server)
        .await;

    let mut context = AuthContext::initialize(client_for(&server), MemorySessionStore::new()).await;
    let err = context.signup("Ann", "ann@x.com", "secret1").await.unwrap_err();

    match err {
        ClientError::Api(ApiError::Conflict(message)) => {
            assert_eq!(message, "Email already registered")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!context.is_authenticated());
}

#[tokio::test]
async fn test_signup_persists_session_and_attaches_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_json("tok-1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/workouts"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let mut context = AuthContext::initialize(client_for(&server), store).await;

    let user = context.signup("Ann", "ann@x.com", "secret1").await.unwrap();
    assert_eq!(user.name, "Ann");
    assert_eq!(context.store().load().unwrap(), Some(stored_session("tok-1")));

    context.require_session().unwrap();
    let workouts = context.client().list_workouts().await.unwrap();
    assert!(workouts.is_empty());
}

#[tokio::test]
async fn test_initialize_restores_valid_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemorySessionStore::with_session(stored_session("stored"));
    let context = AuthContext::initialize(client_for(&server), store).await;

    assert!(context.is_authenticated());
    assert_eq!(context.user().map(|u| u.email.as_str()), Some("ann@x.com"));
    assert_eq!(context.client().token(), Some("stored"));
}

#[tokio::test]
async fn test_initialize_clears_rejected_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "about:blank",
            "title": "Unauthorized",
            "status": 401,
            "detail": "Token expired",
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.save(&stored_session("expired")).unwrap();

    let context = AuthContext::initialize(client_for(&server), store).await;

    assert!(!context.is_authenticated());
    assert!(matches!(context.require_session(), Err(ClientError::NotLoggedIn)));
    assert_eq!(context.store().load().unwrap(), None);
    assert_eq!(context.client().token(), None);
}

#[tokio::test]
async fn test_login_then_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json("tok-2")))
        .mount(&server)
        .await;

    let mut context = AuthContext::initialize(client_for(&server), MemorySessionStore::new()).await;
    context.login("ann@x.com", "secret1").await.unwrap();
    assert!(context.is_authenticated());

    context.logout().unwrap();
    assert!(!context.is_authenticated());
    assert_eq!(context.client().token(), None);
    assert_eq!(context.store().load().unwrap(), None);
}

#[tokio::test]
async fn test_workout_calls_hit_expected_routes() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    let workout = json!({
        "id": id,
        "user_id": USER_ID,
        "name": "Leg Day",
        "exercises": [{ "name": "Squat", "sets": 3, "reps": 8, "weight": 60.0 }],
        "created_at": "2026-01-05T10:00:00Z",
        "updated_at": "2026-01-06T10:00:00Z",
    });
    Mock::given(method("PUT"))
        .and(path(format!("/api/workouts/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(workout))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/workouts/{id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Workout deleted" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/workouts/{}", Uuid::nil())))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "about:blank",
            "title": "Not Found",
            "status": 404,
            "detail": "Workout not found",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .update_workout(id, &WorkoutRequest::default())
        .await
        .unwrap();
    assert_eq!(updated.exercises[0].weight, Some(60.0));
    assert!(updated.updated_at.is_some());

    let message = client.delete_workout(id).await.unwrap();
    assert_eq!(message.message, "Workout deleted");

    let err = client.delete_workout(Uuid::nil()).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Workout not found"));
}
