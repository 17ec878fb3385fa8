//! Bondcalc REST API Server.
//!
//! This crate exposes the `bondcalc-core` engine over HTTP.
//!
//! ## Features
//!
//! - Current yield and approximate yield to maturity
//! - Premium/discount/par classification
//! - Discounted cashflows and dated payment schedules
//! - Field-level validation errors, all violations reported at once
//! - OpenAPI document at `/api-docs/openapi.json`
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! bondcalc-server
//!
//! # Custom host and port
//! bondcalc-server --host 0.0.0.0 --port 3000
//!
//! # Settings from a file
//! bondcalc-server --config config/bondcalc.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
