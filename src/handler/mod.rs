//! HTTP surface for the landing service
//!
//! Two stateless flows share one router and nothing else: the landing page
//! (fetch, project, render) and the contact relay (`POST /api/contact`).
//! Concurrent requests get independent store lookups and transport sessions;
//! there is no shared mutable state and no coordination between the flows.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::profile::ContactMessage;
use crate::relay::MailTransport;
use crate::render;
use crate::store::{ProfileLookup, ProfileStore};

/// Application state shared across requests.
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub mailer: Arc<dyn MailTransport>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>, mailer: Arc<dyn MailTransport>) -> Self {
        Self {
            store,
            mailer,
            start_time: Instant::now(),
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing_page))
        // Non-POST methods get an explicit 405 body, not the bare default.
        .route(
            "/api/contact",
            post(submit_contact).fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - the tenant landing page.
///
/// Every lookup failure mode collapses to the placeholder render with HTTP
/// 200. The distinct causes are logged here, at the one boundary where the
/// fail-soft policy applies.
async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let profile = match state.store.fetch().await {
        ProfileLookup::Found(profile) => Some(profile),
        ProfileLookup::NotFound => {
            tracing::warn!("tenant record not found, serving placeholder");
            None
        }
        ProfileLookup::Unavailable(cause) => {
            tracing::error!(%cause, "profile store unavailable, serving placeholder");
            None
        }
    };

    Html(render::page(profile.as_ref()))
}

/// POST /api/contact - relay a contact-form submission.
///
/// Fire-and-forget: 200 means the transport accepted the hand-off, not that
/// the mail was delivered. Transport failures surface as a generic 500 with
/// no detail leakage; the cause is logged for operator visibility.
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(message): Json<ContactMessage>,
) -> (StatusCode, Json<ContactResponse>) {
    let request_id = Uuid::new_v4();

    match state.mailer.deliver(&message).await {
        Ok(()) => {
            tracing::info!(%request_id, sender = %message.email, "contact message relayed");
            (
                StatusCode::OK,
                Json(ContactResponse {
                    message: "Email sent successfully!".to_string(),
                }),
            )
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "contact relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse {
                    message: "Internal server error".to_string(),
                }),
            )
        }
    }
}

/// Fallback for non-POST methods on the contact route. No side effects.
async fn method_not_allowed() -> (StatusCode, Json<ContactResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ContactResponse {
            message: "Method Not Allowed".to_string(),
        }),
    )
}

/// GET /health - service health and uptime.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Response body for the contact endpoint, all status codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

/// Health response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: String,
}
