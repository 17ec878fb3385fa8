//! Closed-form yield measures.
//!
//! Provides:
//! - Current yield
//! - Approximate yield to maturity
//!
//! All inputs and outputs are percentages where a rate is involved.

use rust_decimal::Decimal;

use crate::error::{BondCalcError, BondCalcResult};

/// Calculate current yield.
///
/// # Formula
///
/// ```text
/// Current Yield = (Annual Coupon / Market Price) * 100
/// ```
///
/// # Returns
///
/// Current yield in percent (e.g., 5.26 for 5.26%).
pub fn current_yield(annual_coupon: Decimal, market_price: Decimal) -> BondCalcResult<Decimal> {
    let ratio = annual_coupon.checked_div(market_price).ok_or_else(|| {
        BondCalcError::business_rule(format!(
            "current yield is undefined for market price {market_price}"
        ))
    })?;
    checked(ratio.checked_mul(Decimal::ONE_HUNDRED), "current yield")
}

/// Approximate yield to maturity in a single step.
///
/// # Formula
///
/// ```text
///         Annual Coupon + (Face - Price) / Years
/// YTM = ------------------------------------------ * 100
///               (Face + Price) / 2
/// ```
///
/// This is not an iterative solver and does not reproduce exact bond-math
/// YTM, but it keeps the usual ordering: above current yield for discount
/// bonds, below it for premium bonds, and equal to the coupon rate at par.
///
/// # Returns
///
/// Yield to maturity in percent.
pub fn approximate_ytm(
    annual_coupon: Decimal,
    face_value: Decimal,
    market_price: Decimal,
    years_to_maturity: Decimal,
) -> BondCalcResult<Decimal> {
    let pull_to_par = checked(face_value.checked_sub(market_price), "price discount")?
        .checked_div(years_to_maturity)
        .ok_or_else(|| {
            BondCalcError::business_rule(format!(
                "yield to maturity is undefined for {years_to_maturity} years to maturity"
            ))
        })?;
    let numerator = checked(annual_coupon.checked_add(pull_to_par), "YTM numerator")?;
    let average_price = checked(face_value.checked_add(market_price), "average price")?
        / Decimal::TWO;
    let ratio = numerator.checked_div(average_price).ok_or_else(|| {
        BondCalcError::business_rule("yield to maturity is undefined for a zero average price")
    })?;
    checked(ratio.checked_mul(Decimal::ONE_HUNDRED), "yield to maturity")
}

/// Turns a failed checked operation into a business rule error.
pub(crate) fn checked(value: Option<Decimal>, what: &str) -> BondCalcResult<Decimal> {
    value.ok_or_else(|| BondCalcError::business_rule(format!("{what} overflowed")))
}
