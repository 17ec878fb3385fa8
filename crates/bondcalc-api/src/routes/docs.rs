//! OpenAPI document.

use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    BondCalculationRequest, CalculationResponse, CashflowEntry, ScheduleEntry, ScheduleResponse,
};
use crate::error::{ErrorBody, ErrorResponse, FieldError};
use crate::routes::{bonds, health};

/// OpenAPI description of the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bondcalc API",
        description = "Current yield, approximate yield to maturity, cashflows and payment schedules for fixed-rate bonds"
    ),
    paths(health::health_check, bonds::calculate, bonds::schedule),
    components(schemas(
        BondCalculationRequest,
        CalculationResponse,
        CashflowEntry,
        ScheduleEntry,
        ScheduleResponse,
        ErrorResponse,
        ErrorBody,
        FieldError,
        health::HealthResponse
    )),
    tags(
        (name = "bonds", description = "Bond calculations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/health".to_string()));
        assert!(paths.contains(&"/api/v1/bonds/calculate".to_string()));
        assert!(paths.contains(&"/api/v1/bonds/schedule".to_string()));
    }

    #[test]
    fn test_document_has_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;
        assert!(schemas.contains_key("BondCalculationRequest"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
