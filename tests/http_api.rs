use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use campus_registry::api::{build_router, AppState};
use campus_registry::runtime::CampusSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, CampusSystem) {
    let system = CampusSystem::default();
    let router = build_router(AppState::new(system.campus_client.clone()));
    (router, system)
}

async fn send(app: &Router, method: Method, uri: &str, payload: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

async fn create(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/campuses",
        Some(json!({
            "name": name,
            "address": "1 Quad Road",
            "city": "Riverton",
            "phone": "555-0100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("id should be a string").to_string()
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _system) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_and_fetch_campus() {
    let (app, _system) = app();
    let id = create(&app, "North").await;

    let (status, body) = send(&app, Method::GET, &format!("/api/campuses/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "North");
    assert_eq!(body["statusCode"], "OPEN");
    assert_eq!(body["usable"], true);

    let (status, body) = send(&app, Method::GET, "/api/campuses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn create_with_blank_name_is_bad_request() {
    let (app, _system) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/campuses",
        Some(json!({ "name": " ", "address": "1 Quad Road", "city": "Riverton" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn missing_campus_is_not_found() {
    let (app, _system) = app();
    let (status, body) = send(&app, Method::GET, "/api/campuses/campus_404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Campus not found with id: campus_404");
}

#[tokio::test]
async fn transitions_return_status_summary() {
    let (app, _system) = app();
    let id = create(&app, "North").await;

    let (status, body) = send(&app, Method::PUT, &format!("/api/campuses/{id}/maintenance"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Campus put in maintenance mode",
            "id": id,
            "name": "North",
            "code": "MAINTENANCE",
            "description": "Campus is under maintenance with limited access",
            "acceptsActivity": false,
            "schedulable": false
        })
    );

    let (status, body) = send(&app, Method::PUT, &format!("/api/campuses/{id}/close"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Campus closed successfully");
    assert_eq!(body["code"], "CLOSED");

    let (status, body) = send(&app, Method::PUT, &format!("/api/campuses/{id}/open"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Campus opened successfully");
    assert_eq!(body["acceptsActivity"], true);
}

#[tokio::test]
async fn maintenance_from_closed_is_bad_request() {
    let (app, _system) = app();
    let id = create(&app, "North").await;
    send(&app, Method::PUT, &format!("/api/campuses/{id}/close"), None).await;

    let (status, body) = send(&app, Method::PUT, &format!("/api/campuses/{id}/maintenance"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "cannot enter maintenance while closed; open first", "status": 400 })
    );

    let (_, body) = send(&app, Method::GET, &format!("/api/campuses/{id}"), None).await;
    assert_eq!(body["statusCode"], "CLOSED");
}

#[tokio::test]
async fn transition_on_missing_campus_is_not_found() {
    let (app, _system) = app();
    let (status, _) = send(&app, Method::PUT, "/api/campuses/campus_9/open", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_soft() {
    let (app, _system) = app();
    let id = create(&app, "North").await;

    let (status, body) = send(&app, Method::DELETE, &format!("/api/campuses/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Campus deactivated successfully", "id": id }));

    let (status, body) = send(&app, Method::GET, &format!("/api/campuses/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], "CLOSED");
    assert_eq!(body["usable"], false);

    let (status, body) = send(&app, Method::DELETE, "/api/campuses/campus_77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Campus not found", "id": "campus_77" }));
}

#[tokio::test]
async fn update_overwrites_fields_and_collapses_failures_to_not_found() {
    let (app, _system) = app();
    let id = create(&app, "North").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/campuses/{id}"),
        Some(json!({ "city": "Lakeside", "statusCode": "MAINTENANCE" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Lakeside");
    assert_eq!(body["statusCode"], "MAINTENANCE");
    assert_eq!(body["usable"], false);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/campuses/{id}"),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/campuses/campus_50",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_state_and_available_queries() {
    let (app, _system) = app();
    let north = create(&app, "North").await;
    let south = create(&app, "South").await;
    send(&app, Method::PUT, &format!("/api/campuses/{south}/maintenance"), None).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/campuses/{south}/status"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "MAINTENANCE");
    assert_eq!(body["state"], "MAINTENANCE");
    assert_eq!(body["usable"], false);
    assert_eq!(body["schedulable"], false);

    let (status, body) = send(&app, Method::GET, "/api/campuses/state/maintenance", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], south);

    let (status, body) = send(&app, Method::GET, "/api/campuses/available", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], north);
}
