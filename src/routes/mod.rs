//! Router assembly and the uniform response envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every endpoint answers with the same JSON shape,
//! `{success, data?, message?, total?}`, so front-end callers handle one
//! contract. Read endpoints never report store outages (the services layer
//! masks them with fixture data); errors reaching this layer are either
//! missing records (404) or write failures (500).

pub mod courses;
pub mod dashboard;
pub mod grades;
pub mod leads;
pub mod matriculations;
pub mod seed;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::DataError;
use crate::state::AppState;

/// Build the full API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/leads", get(leads::list).post(leads::create))
        .route(
            "/api/leads/{id}",
            get(leads::get).put(leads::update).delete(leads::delete),
        )
        .route("/api/courses", get(courses::list).post(courses::create))
        .route(
            "/api/courses/{id}",
            get(courses::get).put(courses::update).delete(courses::delete),
        )
        .route(
            "/api/matriculations",
            get(matriculations::list).post(matriculations::create),
        )
        .route("/api/matriculations/{id}", get(matriculations::get))
        .route("/api/grades", get(grades::list).post(grades::create))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/seed", post(seed::run))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

// ===== RESPONSE ENVELOPE =====

/// Uniform response body: `{success, data?, message?, total?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response carrying a payload.
    #[must_use]
    pub fn data(data: T) -> Self {
        Self { success: true, data: Some(data), message: None, total: None }
    }

    /// Successful response carrying a payload and a human-readable message.
    #[must_use]
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data: Some(data), message: Some(message.into()), total: None }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Successful listing; `total` mirrors the item count.
    #[must_use]
    pub fn listing(items: Vec<T>) -> Self {
        let total = items.len();
        Self { success: true, data: Some(items), message: None, total: Some(total) }
    }
}

impl Envelope<()> {
    /// Successful response with only a message, no payload.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, data: None, message: Some(message.into()), total: None }
    }

    /// Failed response with a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: Some(message.into()), total: None }
    }
}

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<Envelope<()>>);

/// Map a service error onto a status code and failure envelope.
#[must_use]
pub fn reject(err: &DataError) -> ApiError {
    let status = match err {
        DataError::NotFound { .. } => StatusCode::NOT_FOUND,
        DataError::StoreNotConfigured | DataError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(Envelope::failure(err.to_string())))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
