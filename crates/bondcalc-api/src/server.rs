//! Router construction and server startup.

use std::any::Any;

use axum::{
    extract::Request,
    http::header,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::{ApiError, ErrorBody};
use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.permissive_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // OpenAPI
        .route("/api-docs/openapi.json", get(routes::docs::openapi_json))
        // API v1
        .nest("/api/v1", api_v1_routes())
        .fallback(routes::not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_envelope))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/bonds/calculate", post(routes::bonds::calculate))
        .route("/bonds/schedule", post(routes::bonds::schedule))
}

/// Turns a handler panic into an opaque 500. The payload is logged only.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%detail, "handler panicked");
    ApiError::Internal(detail).into_response()
}

/// Stamps the request path onto error bodies, including the 404 fallback
/// and caught panics. Error statuses raised by axum itself (405, 413 from
/// the body limit) get a body built from the status.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    let status = response.status();

    if let Some(body) = response.extensions().get::<ErrorBody>().cloned() {
        return body.with_path(path).into_response_with(status);
    }
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    tracing::debug!(%path, %status, "wrapping framework error response");
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut wrapped = ErrorBody::from_status(status)
        .with_path(path)
        .into_response_with(status);
    if let Some(allow) = allow {
        wrapped.headers_mut().insert(header::ALLOW, allow);
    }
    wrapped
}

/// Run the server until Ctrl+C.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Bondcalc API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api-docs/openapi.json");
    tracing::info!("  POST /api/v1/bonds/calculate");
    tracing::info!("  POST /api/v1/bonds/schedule");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
