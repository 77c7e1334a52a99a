//! # HTTP API
//!
//! Routes:
//! - GET    /health
//! - POST   /api/campuses: create
//! - GET    /api/campuses: list all
//! - GET    /api/campuses/available: campuses accepting activity
//! - GET    /api/campuses/state/{code}: campuses in a state (case-insensitive)
//! - GET    /api/campuses/{id}
//! - PUT    /api/campuses/{id}: bulk update
//! - DELETE /api/campuses/{id}: soft delete (close)
//! - PUT    /api/campuses/{id}/open
//! - PUT    /api/campuses/{id}/close
//! - PUT    /api/campuses/{id}/maintenance
//! - GET    /api/campuses/{id}/status
//!
//! Handlers only translate between HTTP and [`CampusClient`]; lifecycle rules live in
//! [`crate::lifecycle`].

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::clients::CampusClient;

#[derive(Clone)]
pub struct AppState {
    pub campuses: CampusClient,
}

impl AppState {
    pub fn new(campuses: CampusClient) -> Self {
        Self { campuses }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::healthcheck))
        .route(
            "/api/campuses",
            get(handlers::list_campuses).post(handlers::create_campus),
        )
        .route("/api/campuses/available", get(handlers::available_campuses))
        .route("/api/campuses/state/{code}", get(handlers::campuses_in_state))
        .route(
            "/api/campuses/{id}",
            get(handlers::get_campus)
                .put(handlers::update_campus)
                .delete(handlers::delete_campus),
        )
        .route("/api/campuses/{id}/open", put(handlers::open_campus))
        .route("/api/campuses/{id}/close", put(handlers::close_campus))
        .route("/api/campuses/{id}/maintenance", put(handlers::maintain_campus))
        .route("/api/campuses/{id}/status", get(handlers::campus_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
