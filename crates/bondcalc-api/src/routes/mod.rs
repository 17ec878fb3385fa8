//! HTTP route handlers.

pub mod bonds;
pub mod docs;
pub mod health;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
