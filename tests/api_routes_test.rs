//! End-to-end tests for the HTTP API over an in-memory database.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use stagelight::{
    config::Config,
    database::Database,
    web::{create_router, AppState},
};

async fn test_app() -> Router {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();
    // A single connection keeps every query on the same in-memory database
    config.database.max_connections = Some(1);

    let database = Database::new(&config.database).await.expect("connect");
    database.migrate().await.expect("migrate");

    create_router(AppState::new(config, &database))
}

// Helper function to send requests to the app
async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);

    let request = if let Some(body) = body {
        request_builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

fn show_body(title: &str, days_from_now: i64) -> Value {
    let when = (Utc::now() + Duration::days(days_from_now)).to_rfc3339();
    json!({
        "title": title,
        "date": when,
        "time": when,
        "description": "An evening of stand-up"
    })
}

async fn create_show(app: &Router, body: Value) -> i64 {
    let (status, response) =
        send_request(app, Method::POST, "/api/v1/admin/shows", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    response["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert!(response.get("timestamp").is_some());
}

#[tokio::test]
async fn show_crud_over_http() {
    let app = test_app().await;

    let id = create_show(&app, show_body("Comedy Gala", 7)).await;

    let (status, response) =
        send_request(&app, Method::GET, &format!("/api/v1/shows/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["title"], "Comedy Gala");
    assert_eq!(response["data"]["status"], "scheduled");
    assert_eq!(response["data"]["published"], true);

    let (status, response) = send_request(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/shows/{id}"),
        Some(json!({ "title": "Comedy Gala: Extended", "price": "15.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["title"], "Comedy Gala: Extended");
    assert_eq!(response["data"]["price"], 15.0);

    let (status, response) = send_request(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/shows/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);

    let (status, _) = send_request(&app, Method::GET, &format!("/api/v1/shows/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_show_rejects_blank_title() {
    let app = test_app().await;

    let mut body = show_body("", 7);
    body["title"] = json!("");
    let (status, response) =
        send_request(&app, Method::POST, "/api/v1/admin/shows", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Title is required");
}

#[tokio::test]
async fn create_show_rejects_bad_date_and_url() {
    let app = test_app().await;

    let mut body = show_body("Bad Date", 7);
    body["date"] = json!("next friday");
    let (status, response) =
        send_request(&app, Method::POST, "/api/v1/admin/shows", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Invalid date format");

    let mut body = show_body("Bad Url", 7);
    body["ticket_url"] = json!("not a url");
    let (status, response) =
        send_request(&app, Method::POST, "/api/v1/admin/shows", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Invalid URL format");
}

#[tokio::test]
async fn invalid_id_is_rejected_before_lookup() {
    let app = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/api/v1/shows/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "ID must be a positive integer");

    let (status, response) = send_request(&app, Method::GET, "/api/v1/shows/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn ticket_updates_drive_soldout_over_http() {
    let app = test_app().await;

    let mut body = show_body("Capacity Night", 7);
    body["max_capacity"] = json!(100);
    body["sold_tickets"] = json!(95);
    let id = create_show(&app, body).await;

    let (status, response) = send_request(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/shows/{id}/tickets"),
        Some(json!({ "sold_tickets": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["sold_tickets"], 100);
    assert_eq!(response["data"]["status"], "soldout");

    // Staff can still override the status explicitly
    let (status, response) = send_request(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/shows/{id}/status"),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["status"], "cancelled");
}

#[tokio::test]
async fn feature_and_publish_toggles_over_http() {
    let app = test_app().await;

    let id = create_show(&app, show_body("Toggle Night", 7)).await;

    let (status, response) = send_request(
        &app,
        Method::POST,
        &format!("/api/v1/admin/shows/{id}/feature"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["featured"], true);

    let (status, response) = send_request(
        &app,
        Method::POST,
        &format!("/api/v1/admin/shows/{id}/publish"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["published"], false);

    // Unpublished shows drop out of the public listing
    let (status, response) = send_request(&app, Method::GET, "/api/v1/shows", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 0);

    // But remain visible on the staff listing
    let (status, response) = send_request(
        &app,
        Method::GET,
        "/api/v1/admin/shows?include_unpublished=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn public_listings_filter_by_time_window() {
    let app = test_app().await;

    create_show(&app, show_body("Past Show", -10)).await;
    let mut featured = show_body("Featured Show", 5);
    featured["featured"] = json!(true);
    create_show(&app, featured).await;

    let (status, response) = send_request(&app, Method::GET, "/api/v1/shows/upcoming", None).await;
    assert_eq!(status, StatusCode::OK);
    let upcoming = response["data"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["title"], "Featured Show");

    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/shows/featured?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 1);

    let (status, response) = send_request(&app, Method::GET, "/api/v1/shows/past", None).await;
    assert_eq!(status, StatusCode::OK);
    let past = response["data"].as_array().unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0]["title"], "Past Show");
}

#[tokio::test]
async fn contact_messages_over_http() {
    let app = test_app().await;

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/messages",
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "short"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/messages",
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Do you have wheelchair access at the venue?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Message sent successfully");
    let id = response["data"]["id"].as_i64().unwrap();
    assert_eq!(response["data"]["read"], false);

    let (status, response) = send_request(
        &app,
        Method::POST,
        &format!("/api/v1/admin/messages/{id}/read"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["read"], true);

    let (status, response) = send_request(&app, Method::GET, "/api/v1/admin/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn mailing_list_over_http() {
    let app = test_app().await;

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/subscribers/subscribe",
        Some(json!({ "email": "fan@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Successfully subscribed");
    assert_eq!(response["data"]["email"], "fan@example.com");

    // Subscribing again is reported, not treated as an error
    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/subscribers/subscribe",
        Some(json!({ "email": "fan@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Already subscribed");

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/subscribers/unsubscribe",
        Some(json!({ "email": "fan@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Successfully unsubscribed");

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/subscribers/unsubscribe",
        Some(json!({ "email": "stranger@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Email not found in our mailing list");

    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/subscribers/subscribe",
        Some(json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
}
