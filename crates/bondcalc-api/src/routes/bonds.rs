//! Bond calculation endpoints.
//!
//! Bodies arrive as raw bytes so that malformed JSON and wrong field types
//! are reported through the same validation error as range violations.

use axum::{body::Bytes, extract::State, Json};
use chrono::{NaiveDate, Utc};

use crate::dto::{CalculationResponse, ScheduleEntry, ScheduleResponse};
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validation::{validate_bond_request, ValidatedBond};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Calculate yields, totals, status, cashflows and schedule.
#[utoipa::path(
    post,
    path = "/api/v1/bonds/calculate",
    tag = "bonds",
    request_body = crate::dto::BondCalculationRequest,
    responses(
        (status = 200, description = "Bond metrics", body = CalculationResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 422, description = "Input could not be processed", body = crate::error::ErrorResponse)
    )
)]
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<CalculationResponse>> {
    let ValidatedBond { params, start_date } = validate_bond_request(&body)?;
    let start_date = start_date.unwrap_or_else(today);

    let result = state.calculator.calculate(&params, start_date)?;

    tracing::info!(
        status = %result.status,
        periods = result.total_periods,
        current_yield = %result.current_yield,
        ytm = %result.yield_to_maturity,
        "bond calculated"
    );

    Ok(Json(CalculationResponse::from(&result)))
}

/// Calculate the dated payment schedule only.
#[utoipa::path(
    post,
    path = "/api/v1/bonds/schedule",
    tag = "bonds",
    request_body = crate::dto::BondCalculationRequest,
    responses(
        (status = 200, description = "Payment schedule", body = ScheduleResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 422, description = "Input could not be processed", body = crate::error::ErrorResponse)
    )
)]
pub async fn schedule(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ScheduleResponse>> {
    let ValidatedBond { params, start_date } = validate_bond_request(&body)?;
    let start_date = start_date.unwrap_or_else(today);

    let rows = state.calculator.schedule(&params, start_date)?;
    let schedule: Vec<ScheduleEntry> = rows.iter().map(ScheduleEntry::from).collect();
    let coupon_payment = schedule.first().map_or(0.0, |row| row.coupon_payment);

    tracing::info!(periods = schedule.len(), %start_date, "schedule generated");

    Ok(Json(ScheduleResponse {
        total_periods: schedule.len() as u32,
        coupon_payment,
        start_date: start_date.format("%Y-%m-%d").to_string(),
        schedule,
    }))
}
