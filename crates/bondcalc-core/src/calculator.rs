//! Bond calculation engine.
//!
//! [`BondCalculator`] turns [`BondParameters`] into coupon figures, yields,
//! a discounted cashflow sequence and a dated payment schedule.
//!
//! # Conventions
//!
//! - Rates are percentages on input and output.
//! - The number of periods is `ceil(years * frequency)`: a partial final
//!   period counts as a full one.
//! - Cashflows are discounted at the end of each period with the periodic
//!   yield `ytm / 100 / frequency`, whether the yield was supplied or
//!   approximated.
//! - Payment dates advance from the start date by whole calendar months and
//!   are clamped to the end of shorter months (Jan 31 + 1 month = Feb 28).

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{BondCalcError, BondCalcResult};
use crate::types::{
    BondParameters, BondStatus, CalculationResult, CashflowPeriod, PaymentType, ScheduleRow,
    YtmSource,
};
use crate::yields::{approximate_ytm, checked, current_yield};

/// Upper bound on coupon periods: 100 years of monthly coupons.
pub const MAX_PERIODS: u32 = 1200;

/// Coupon figures shared by every output of a calculation.
#[derive(Debug, Clone, Copy)]
struct CouponTerms {
    periodic_coupon_rate: Decimal,
    coupon_payment: Decimal,
    annual_coupon: Decimal,
    total_periods: u32,
}

impl CouponTerms {
    fn derive(params: &BondParameters) -> BondCalcResult<Self> {
        let frequency = Decimal::from(params.coupon_frequency().periods_per_year());
        let periodic_coupon_rate = params.coupon_rate() / Decimal::ONE_HUNDRED / frequency;
        let coupon_payment = checked(
            params.face_value().checked_mul(periodic_coupon_rate),
            "coupon payment",
        )?;
        // face * rate / 100 is the same amount as coupon_payment * frequency,
        // without the rounding left over from dividing by 12.
        let annual_coupon = checked(
            params.face_value().checked_mul(params.coupon_rate()),
            "annual coupon",
        )? / Decimal::ONE_HUNDRED;

        Ok(Self {
            periodic_coupon_rate,
            coupon_payment,
            annual_coupon,
            total_periods: total_periods(params)?,
        })
    }

    /// Interest paid through `period`, inclusive.
    fn cumulative_interest(&self, period: u32, periods_per_year: u32) -> BondCalcResult<Decimal> {
        let paid = checked(
            self.annual_coupon.checked_mul(Decimal::from(period)),
            "cumulative interest",
        )?;
        Ok(paid / Decimal::from(periods_per_year))
    }
}

/// Number of coupon periods: `ceil(years * frequency)`, never less than one.
pub fn total_periods(params: &BondParameters) -> BondCalcResult<u32> {
    let frequency = Decimal::from(params.coupon_frequency().periods_per_year());
    let raw = checked(
        params.years_to_maturity().checked_mul(frequency),
        "period count",
    )?
    .ceil();

    let periods = raw.to_u32().ok_or_else(|| {
        BondCalcError::business_rule(format!("period count {raw} is not a valid number of periods"))
    })?;
    let periods = periods.max(1);

    if periods > MAX_PERIODS {
        return Err(BondCalcError::business_rule(format!(
            "{periods} periods exceeds the maximum of {MAX_PERIODS}"
        )));
    }
    Ok(periods)
}

/// Total coupon interest over the life of the bond: `annual coupon * years`.
pub fn total_interest(params: &BondParameters) -> BondCalcResult<Decimal> {
    let terms = CouponTerms::derive(params)?;
    interest_over_life(&terms, params)
}

fn interest_over_life(terms: &CouponTerms, params: &BondParameters) -> BondCalcResult<Decimal> {
    checked(
        terms.annual_coupon.checked_mul(params.years_to_maturity()),
        "total interest",
    )
}

/// Stateless calculator for plain fixed-rate bonds.
///
/// # Example
///
/// ```rust
/// use bondcalc_core::{BondCalculator, BondParameters, CouponFrequency};
/// use rust_decimal_macros::dec;
///
/// let params = BondParameters::new(
///     dec!(1000),
///     dec!(5),
///     dec!(1000),
///     dec!(5),
///     CouponFrequency::SemiAnnual,
/// );
///
/// let cashflows = BondCalculator::new().cashflows(&params).unwrap();
/// assert_eq!(cashflows.len(), 10);
/// assert_eq!(cashflows[0].amount, dec!(25));
/// assert_eq!(cashflows[9].amount, dec!(1025));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BondCalculator;

impl BondCalculator {
    /// Creates a calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes every metric, the cashflows and the schedule.
    ///
    /// `start_date` anchors the payment dates of the schedule.
    pub fn calculate(
        &self,
        params: &BondParameters,
        start_date: NaiveDate,
    ) -> BondCalcResult<CalculationResult> {
        log::debug!(
            "calculating bond: face={} coupon_rate={}% price={} years={} frequency={} ytm={:?}",
            params.face_value(),
            params.coupon_rate(),
            params.market_price(),
            params.years_to_maturity(),
            params.coupon_frequency().periods_per_year(),
            params.yield_to_maturity(),
        );

        let terms = CouponTerms::derive(params)?;
        log::trace!(
            "coupon terms: periodic_rate={} payment={} annual={} periods={}",
            terms.periodic_coupon_rate,
            terms.coupon_payment,
            terms.annual_coupon,
            terms.total_periods,
        );

        let current_yield = current_yield(terms.annual_coupon, params.market_price())?;
        let (yield_to_maturity, ytm_source) = resolve_ytm(&terms, params)?;
        let total_interest = interest_over_life(&terms, params)?;
        let status = BondStatus::classify(params.market_price(), params.face_value());

        let cashflows = build_cashflows(&terms, params, yield_to_maturity)?;
        let schedule = build_schedule(&terms, params, start_date)?;
        let total_present_value = cashflows.iter().try_fold(Decimal::ZERO, |acc, cf| {
            checked(acc.checked_add(cf.present_value), "total present value")
        })?;

        log::debug!(
            "bond result: current_yield={}% ytm={}% ({:?}) total_interest={} status={} periods={}",
            current_yield,
            yield_to_maturity,
            ytm_source,
            total_interest,
            status,
            terms.total_periods,
        );

        Ok(CalculationResult {
            periodic_coupon_rate: terms.periodic_coupon_rate,
            coupon_payment: terms.coupon_payment,
            annual_coupon: terms.annual_coupon,
            total_periods: terms.total_periods,
            current_yield,
            yield_to_maturity,
            ytm_source,
            total_interest,
            status,
            total_present_value,
            cashflows,
            schedule,
        })
    }

    /// Yield to maturity in percent: the supplied value, or the approximation.
    pub fn yield_to_maturity(&self, params: &BondParameters) -> BondCalcResult<(Decimal, YtmSource)> {
        let terms = CouponTerms::derive(params)?;
        resolve_ytm(&terms, params)
    }

    /// Discounted cashflows, one per period.
    ///
    /// The last period pays the coupon plus face value.
    pub fn cashflows(&self, params: &BondParameters) -> BondCalcResult<Vec<CashflowPeriod>> {
        let terms = CouponTerms::derive(params)?;
        let (ytm, _) = resolve_ytm(&terms, params)?;
        build_cashflows(&terms, params, ytm)
    }

    /// Dated coupon schedule starting from `start_date`.
    ///
    /// Does not depend on the yield.
    pub fn schedule(
        &self,
        params: &BondParameters,
        start_date: NaiveDate,
    ) -> BondCalcResult<Vec<ScheduleRow>> {
        log::debug!(
            "building schedule: face={} coupon_rate={}% years={} frequency={} start={}",
            params.face_value(),
            params.coupon_rate(),
            params.years_to_maturity(),
            params.coupon_frequency().periods_per_year(),
            start_date,
        );
        let terms = CouponTerms::derive(params)?;
        build_schedule(&terms, params, start_date)
    }
}

fn resolve_ytm(
    terms: &CouponTerms,
    params: &BondParameters,
) -> BondCalcResult<(Decimal, YtmSource)> {
    match params.yield_to_maturity() {
        Some(ytm) => Ok((ytm, YtmSource::Provided)),
        None => {
            let ytm = approximate_ytm(
                terms.annual_coupon,
                params.face_value(),
                params.market_price(),
                params.years_to_maturity(),
            )?;
            Ok((ytm, YtmSource::Approximated))
        }
    }
}

fn build_cashflows(
    terms: &CouponTerms,
    params: &BondParameters,
    ytm: Decimal,
) -> BondCalcResult<Vec<CashflowPeriod>> {
    let frequency = Decimal::from(params.coupon_frequency().periods_per_year());
    let periodic_yield = (ytm / Decimal::ONE_HUNDRED / frequency)
        .to_f64()
        .ok_or_else(|| {
            BondCalcError::business_rule(format!("periodic yield for {ytm}% is not representable"))
        })?;

    let final_amount = checked(
        terms.coupon_payment.checked_add(params.face_value()),
        "final payment",
    )?;

    (1..=terms.total_periods)
        .map(|period| {
            let (payment_type, amount) = if period == terms.total_periods {
                (PaymentType::CouponAndPrincipal, final_amount)
            } else {
                (PaymentType::Coupon, terms.coupon_payment)
            };

            let discount_factor = (1.0 + periodic_yield).powi(period as i32).recip();
            if !discount_factor.is_finite() {
                return Err(BondCalcError::business_rule(format!(
                    "discount factor for period {period} at {ytm}% is not finite"
                )));
            }
            let present_value = to_decimal(amount.to_f64().unwrap_or(f64::NAN) * discount_factor)
                .ok_or_else(|| {
                    BondCalcError::business_rule(format!(
                        "present value for period {period} is not representable"
                    ))
                })?;
            log::trace!("period {period}: {payment_type} {amount} df={discount_factor} pv={present_value}");

            Ok(CashflowPeriod {
                period,
                payment_type,
                amount,
                discount_factor,
                present_value,
            })
        })
        .collect()
}

fn build_schedule(
    terms: &CouponTerms,
    params: &BondParameters,
    start_date: NaiveDate,
) -> BondCalcResult<Vec<ScheduleRow>> {
    let frequency = params.coupon_frequency();

    (1..=terms.total_periods)
        .map(|period| {
            let months = frequency.months_after(period);
            let payment_date = start_date
                .checked_add_months(Months::new(months))
                .ok_or_else(|| {
                    BondCalcError::invalid_date(format!(
                        "{start_date} plus {months} months is out of range"
                    ))
                })?;

            let remaining_principal = if period == terms.total_periods {
                Decimal::ZERO
            } else {
                params.face_value()
            };

            Ok(ScheduleRow {
                period,
                payment_date,
                coupon_payment: terms.coupon_payment,
                cumulative_interest: terms
                    .cumulative_interest(period, frequency.periods_per_year())?,
                remaining_principal,
            })
        })
        .collect()
}

/// Converts a finite `f64` to `Decimal`, flushing values too small to represent to zero.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).or_else(|| (value.abs() < 1e-20).then_some(Decimal::ZERO))
}
