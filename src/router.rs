//! HTTP routing
//!
//! Builds the application router and its middleware stack.

use crate::api;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, put},
    Router,
};
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Build the application router around the given store
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(api::docs::health_check))
        .route(api::docs::OPENAPI_PATH, get(api::docs::openapi_spec))
        // Post API
        .route(
            "/api/posts",
            get(api::posts::list_posts).post(api::posts::create_post),
        )
        .route("/api/posts/search", get(api::posts::search_posts))
        .route(
            "/api/posts/:id",
            put(api::posts::update_post).delete(api::posts::delete_post),
        )
        .fallback(route_not_found)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
