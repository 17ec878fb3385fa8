//! Discounted cashflow periods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of payment made in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// Regular coupon payment
    Coupon,
    /// Final coupon combined with principal repayment
    CouponAndPrincipal,
}

impl PaymentType {
    /// Wire name: `coupon`, or `principal` for the final combined payment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Coupon => "coupon",
            PaymentType::CouponAndPrincipal => "principal",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One coupon period with its nominal and present value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowPeriod {
    /// 1-based period index
    pub period: u32,
    /// Payment made at the end of the period
    pub payment_type: PaymentType,
    /// Nominal amount paid
    pub amount: Decimal,
    /// `1 / (1 + periodic_yield)^period`
    pub discount_factor: f64,
    /// `amount * discount_factor`
    pub present_value: Decimal,
}

impl CashflowPeriod {
    /// Returns true for the final period that repays principal.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self.payment_type, PaymentType::CouponAndPrincipal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_final() {
        let coupon = CashflowPeriod {
            period: 1,
            payment_type: PaymentType::Coupon,
            amount: dec!(25),
            discount_factor: 0.97,
            present_value: dec!(24.25),
        };
        let last = CashflowPeriod {
            payment_type: PaymentType::CouponAndPrincipal,
            ..coupon
        };
        assert!(!coupon.is_final());
        assert!(last.is_final());
    }

    #[test]
    fn test_payment_type_names() {
        assert_eq!(PaymentType::Coupon.as_str(), "coupon");
        assert_eq!(PaymentType::CouponAndPrincipal.to_string(), "principal");
    }
}
