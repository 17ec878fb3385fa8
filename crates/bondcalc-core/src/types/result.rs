//! Calculation output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BondStatus, CashflowPeriod, ScheduleRow};

/// Where the yield to maturity in a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YtmSource {
    /// Supplied by the caller and used unchanged.
    Provided,
    /// Computed with the single-step approximation.
    Approximated,
}

/// Full set of metrics for one bond.
///
/// Every field is derived from the [`BondParameters`](super::BondParameters)
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Coupon rate per period, as a fraction.
    pub periodic_coupon_rate: Decimal,
    /// Coupon paid each period.
    pub coupon_payment: Decimal,
    /// Coupon paid per year.
    pub annual_coupon: Decimal,
    /// Number of coupon periods, rounded up.
    pub total_periods: u32,
    /// Annual coupon over market price, in percent.
    pub current_yield: Decimal,
    /// Yield to maturity, in percent.
    pub yield_to_maturity: Decimal,
    /// Whether the yield was supplied or approximated.
    pub ytm_source: YtmSource,
    /// Annual coupon times years to maturity.
    pub total_interest: Decimal,
    /// Premium, discount or par.
    pub status: BondStatus,
    /// Sum of the cashflow present values.
    pub total_present_value: Decimal,
    /// Discounted cashflows, one per period.
    pub cashflows: Vec<CashflowPeriod>,
    /// Dated payment schedule, one row per period.
    pub schedule: Vec<ScheduleRow>,
}
