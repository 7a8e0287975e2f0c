//! Folio HTTP server.
//!
//! Wires the message store and HTTP routes into an Axum application.
//! Serves the portfolio page at `/` and the contact-message JSON API
//! at `/api/contact`.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the Axum router with all routes and middleware.
///
/// Exposed so integration tests can drive the full application without
/// binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS — the contact form is same-origin, but keep GET/POST open
    // for local front-end dev servers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .nest("/api/contact", routes::contact::router())
        .merge(routes::site::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
