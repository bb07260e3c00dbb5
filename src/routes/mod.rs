use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, Response, Uri},
    response::IntoResponse,
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::{error::AppError, state::AppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub mod auth;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod params;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .nest("/auth", auth::router())
        .nest("/people", people::router())
        .nest("/planets", planets::router())
        .nest("/users", users::router())
        .nest("/favorite", favorites::router())
}

/// Full application: routes, docs, fallback and the tower middleware stack.
pub fn build_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_request(|_request: &Request<_>, _span: &Span| {
            tracing::info!("request started");
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    create_api_router()
        .merge(doc::scalar_docs())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}

fn request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id
    )
}

async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    AppError::MethodNotAllowed(format!("{method} is not allowed on {}", uri.path()))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
