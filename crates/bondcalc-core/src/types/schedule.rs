//! Dated payment schedule rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dated row of the coupon payment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period index
    pub period: u32,
    /// Payment date
    pub payment_date: NaiveDate,
    /// Coupon paid on `payment_date`
    pub coupon_payment: Decimal,
    /// Interest paid through this period, inclusive
    pub cumulative_interest: Decimal,
    /// Principal outstanding after this payment
    pub remaining_principal: Decimal,
}
