//! Task API contract tests.
//!
//! Verify the requests `TaskApi` sends (paths, query, headers, bodies) and how
//! it classifies the server's responses.

use serde_json::json;
use taskmaster::api::tasks::{TaskApi, CSRF_HEADER};
use taskmaster::api::{ApiError, ListFilter, TaskStore};
use taskmaster::libs::session::Session;
use taskmaster::libs::task::{RecurrenceKind, Schedule, Weekday};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session() -> Session {
    Session {
        session_id: Some("sess42".to_string()),
        csrf_token: Some("tok99".to_string()),
        user_id: Some(7),
    }
}

fn weekly_task() -> serde_json::Value {
    json!({
        "id": 3,
        "user": 7,
        "title": "Gym",
        "description": "Leg day",
        "completed": false,
        "created_at": "2024-01-05T10:00:00Z",
        "daily": false,
        "weekly": true,
        "monthly": false,
        "execution_day": "Monday",
        "execution_time": "18:30:00",
        "execution_date": null
    })
}

#[tokio::test]
async fn test_list_sends_filter_and_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .and(query_param("user_id", "7"))
        .and(query_param("weekly", "true"))
        .and(header("cookie", "sessionid=sess42; csrftoken=tok99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([weekly_task()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    let filter = ListFilter {
        user_id: Some(7),
        kind: Some(RecurrenceKind::Weekly),
        completed_only: false,
    };
    let tasks = api.list(&filter).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Gym");
    assert!(matches!(tasks[0].schedule, Schedule::Weekly { day: Weekday::Monday, .. }));
}

#[tokio::test]
async fn test_create_posts_payload_with_csrf_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/"))
        .and(header(CSRF_HEADER, "tok99"))
        .and(header("referer", format!("{}/", mock_server.uri()).as_str()))
        .and(body_partial_json(json!({"title": "Gym", "weekly": true, "user": 7})))
        .respond_with(ResponseTemplate::new(201).set_body_json(weekly_task()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    let payload = json!({"title": "Gym", "weekly": true, "execution_day": "Monday", "execution_time": "18:30", "user": 7});
    let task = api.create(&payload).await.unwrap();

    assert_eq!(task.id, 3);
}

#[tokio::test]
async fn test_update_and_delete_use_task_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/3/"))
        .and(header(CSRF_HEADER, "tok99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weekly_task()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3/"))
        .and(header(CSRF_HEADER, "tok99"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    api.update(3, &json!({"title": "Gym"})).await.unwrap();
    api.delete(3).await.unwrap();
}

#[tokio::test]
async fn test_toggle_complete_returns_server_state() {
    let mock_server = MockServer::start().await;

    let mut body = weekly_task();
    body["completed"] = json!(true);
    Mock::given(method("POST"))
        .and(path("/api/tasks/3/complete/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    let status = api.toggle_complete(3).await.unwrap();

    assert!(status.completed);
    assert_eq!(status.title, "Gym");
}

#[tokio::test]
async fn test_validation_errors_are_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/3/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "execution_time": ["This field is required."],
            "title": "This field may not be blank."
        })))
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    let err = api.update(3, &json!({})).await.unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.get("execution_time"), Some(&["This field is required.".to_string()][..]));
            assert_eq!(errors.get("title"), Some(&["This field may not be blank.".to_string()][..]));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_field_400_body_gives_empty_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<h1>Bad Request</h1>"))
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    let err = api.delete(3).await.unwrap_err();

    assert_eq!(err, ApiError::Validation(Default::default()));
}

#[tokio::test]
async fn test_status_codes_are_classified() {
    let mock_server = MockServer::start().await;

    for (id, status) in [(1, 401), (2, 403), (3, 404), (4, 500)] {
        Mock::given(method("GET"))
            .and(path(format!("/api/tasks/{}/", id)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;
    }

    let api = TaskApi::new(&mock_server.uri(), session());
    assert_eq!(api.fetch(1).await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(api.fetch(2).await.unwrap_err(), ApiError::Forbidden);
    assert_eq!(api.fetch(3).await.unwrap_err(), ApiError::NotFound);
    assert_eq!(api.fetch(4).await.unwrap_err(), ApiError::Status(500));
}

#[tokio::test]
async fn test_undecodable_task_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    let mut body = weekly_task();
    body["weekly"] = json!(false);
    Mock::given(method("GET"))
        .and(path("/api/tasks/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let api = TaskApi::new(&mock_server.uri(), session());
    assert!(matches!(api.fetch(3).await.unwrap_err(), ApiError::Decode(_)));
}
