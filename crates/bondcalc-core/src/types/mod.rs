//! Domain types for bond calculations.

mod cashflow;
mod frequency;
mod params;
mod result;
mod schedule;
mod status;

pub use cashflow::{CashflowPeriod, PaymentType};
pub use frequency::CouponFrequency;
pub use params::BondParameters;
pub use result::{CalculationResult, YtmSource};
pub use schedule::ScheduleRow;
pub use status::BondStatus;
