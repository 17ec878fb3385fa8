//! Bond parameters accepted by the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CouponFrequency;

/// Terms of a fixed-rate bond for a single calculation.
///
/// Rates are expressed as percentages (5 means 5%). Construction does not
/// check bounds; callers are expected to validate first.
///
/// # Example
///
/// ```rust
/// use bondcalc_core::types::{BondParameters, CouponFrequency};
/// use rust_decimal_macros::dec;
///
/// let params = BondParameters::new(
///     dec!(1000),
///     dec!(5),
///     dec!(1000),
///     dec!(5),
///     CouponFrequency::SemiAnnual,
/// )
/// .with_yield_to_maturity(dec!(4.5));
///
/// assert_eq!(params.yield_to_maturity(), Some(dec!(4.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondParameters {
    face_value: Decimal,
    coupon_rate: Decimal,
    market_price: Decimal,
    years_to_maturity: Decimal,
    coupon_frequency: CouponFrequency,
    yield_to_maturity: Option<Decimal>,
}

impl BondParameters {
    /// Creates parameters without a supplied yield to maturity.
    #[must_use]
    pub fn new(
        face_value: Decimal,
        coupon_rate: Decimal,
        market_price: Decimal,
        years_to_maturity: Decimal,
        coupon_frequency: CouponFrequency,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            market_price,
            years_to_maturity,
            coupon_frequency,
            yield_to_maturity: None,
        }
    }

    /// Supplies a yield to maturity (percent) to use instead of the approximation.
    #[must_use]
    pub fn with_yield_to_maturity(mut self, ytm: Decimal) -> Self {
        self.yield_to_maturity = Some(ytm);
        self
    }

    /// Face (par) value repaid at maturity.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Annual coupon rate, in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Current market price.
    #[must_use]
    pub fn market_price(&self) -> Decimal {
        self.market_price
    }

    /// Remaining life in years.
    #[must_use]
    pub fn years_to_maturity(&self) -> Decimal {
        self.years_to_maturity
    }

    /// Coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(&self) -> CouponFrequency {
        self.coupon_frequency
    }

    /// Caller-supplied yield to maturity, in percent.
    #[must_use]
    pub fn yield_to_maturity(&self) -> Option<Decimal> {
        self.yield_to_maturity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_has_no_ytm() {
        let params = BondParameters::new(
            dec!(1000),
            dec!(5),
            dec!(950),
            dec!(5),
            CouponFrequency::Annual,
        );
        assert_eq!(params.face_value(), dec!(1000));
        assert_eq!(params.coupon_rate(), dec!(5));
        assert_eq!(params.market_price(), dec!(950));
        assert_eq!(params.years_to_maturity(), dec!(5));
        assert_eq!(params.coupon_frequency(), CouponFrequency::Annual);
        assert!(params.yield_to_maturity().is_none());
    }

    #[test]
    fn test_with_ytm_is_copy() {
        let base = BondParameters::new(
            dec!(100),
            dec!(4),
            dec!(100),
            dec!(2),
            CouponFrequency::Quarterly,
        );
        let with_ytm = base.with_yield_to_maturity(dec!(3.75));

        assert!(base.yield_to_maturity().is_none());
        assert_eq!(with_ytm.yield_to_maturity(), Some(dec!(3.75)));
    }
}
