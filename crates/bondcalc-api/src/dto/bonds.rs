//! Bond DTOs.

use bondcalc_core::{BondStatus, CalculationResult, CashflowPeriod, ScheduleRow, YtmSource};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to calculate bond metrics.
///
/// Bodies are validated field by field before deserialization; this type
/// documents the accepted shape and is convenient for clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationRequest {
    /// Face value, at least 1.
    pub face_value: f64,

    /// Annual coupon rate as percentage (e.g., 5.0 for 5%), 0.01 to 100.
    pub coupon_rate: f64,

    /// Market price, at least 0.01.
    pub market_price: f64,

    /// Years to maturity, 0.1 to 100.
    pub years_to_maturity: f64,

    /// Coupon payments per year: 1, 2, 4 or 12. Also accepted as `frequency`.
    pub coupon_frequency: u32,

    /// Yield to maturity as percentage; approximated when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_to_maturity: Option<f64>,

    /// First date payment dates are counted from (YYYY-MM-DD); defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Cashflow entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashflowEntry {
    pub period: u32,
    /// `coupon`, or `principal` for the final coupon-plus-principal payment.
    pub payment_type: String,
    pub amount: f64,
    pub discount_factor: f64,
    pub present_value: f64,
}

impl From<&CashflowPeriod> for CashflowEntry {
    fn from(cf: &CashflowPeriod) -> Self {
        Self {
            period: cf.period,
            payment_type: cf.payment_type.as_str().to_string(),
            amount: to_f64(cf.amount),
            discount_factor: cf.discount_factor,
            present_value: to_f64(cf.present_value),
        }
    }
}

/// Schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub period: u32,
    pub payment_date: String,
    pub coupon_payment: f64,
    pub cumulative_interest: f64,
    pub remaining_principal: f64,
}

impl From<&ScheduleRow> for ScheduleEntry {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            period: row.period,
            payment_date: row.payment_date.format("%Y-%m-%d").to_string(),
            coupon_payment: to_f64(row.coupon_payment),
            cumulative_interest: to_f64(row.cumulative_interest),
            remaining_principal: to_f64(row.remaining_principal),
        }
    }
}

/// Full calculation response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub current_yield: f64,
    pub yield_to_maturity: f64,
    /// `provided` or `approximated`.
    pub ytm_source: String,
    pub total_interest: f64,
    /// `Premium`, `Discount` or `Par`.
    pub status: String,
    pub periodic_coupon_rate: f64,
    pub coupon_payment: f64,
    pub annual_coupon: f64,
    pub total_periods: u32,
    pub total_present_value: f64,
    pub cashflows: Vec<CashflowEntry>,
    pub schedule: Vec<ScheduleEntry>,
}

impl From<&CalculationResult> for CalculationResponse {
    fn from(result: &CalculationResult) -> Self {
        let ytm_source = match result.ytm_source {
            YtmSource::Provided => "provided",
            YtmSource::Approximated => "approximated",
        };
        Self {
            current_yield: to_f64(result.current_yield),
            yield_to_maturity: to_f64(result.yield_to_maturity),
            ytm_source: ytm_source.to_string(),
            total_interest: to_f64(result.total_interest),
            status: status_label(result.status),
            periodic_coupon_rate: to_f64(result.periodic_coupon_rate),
            coupon_payment: to_f64(result.coupon_payment),
            annual_coupon: to_f64(result.annual_coupon),
            total_periods: result.total_periods,
            total_present_value: to_f64(result.total_present_value),
            cashflows: result.cashflows.iter().map(CashflowEntry::from).collect(),
            schedule: result.schedule.iter().map(ScheduleEntry::from).collect(),
        }
    }
}

/// Schedule-only response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub total_periods: u32,
    pub coupon_payment: f64,
    pub start_date: String,
    pub schedule: Vec<ScheduleEntry>,
}

fn status_label(status: BondStatus) -> String {
    status.as_str().to_string()
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
