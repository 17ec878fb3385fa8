//! # Bondcalc Core
//!
//! Calculation engine for plain fixed-rate bonds.
//!
//! Given validated bond terms, the engine derives:
//!
//! - **Coupon figures**: periodic coupon rate, coupon payment, annual coupon
//! - **Yields**: current yield and yield to maturity (supplied or approximated)
//! - **Totals**: total interest and number of coupon periods
//! - **Classification**: premium, discount, or par
//! - **Cashflows**: per-period amounts discounted at the periodic yield
//! - **Schedule**: dated coupon payments with cumulative interest
//!
//! The engine assumes its inputs already satisfy the documented bounds. It
//! performs no I/O and keeps no state between calls, so a single
//! [`BondCalculator`] can be shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_core::prelude::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let params = BondParameters::new(
//!     dec!(1000),
//!     dec!(5),
//!     dec!(950),
//!     dec!(5),
//!     CouponFrequency::Annual,
//! );
//! let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//!
//! let result = BondCalculator::new().calculate(&params, start).unwrap();
//! assert_eq!(result.status, BondStatus::Discount);
//! assert_eq!(result.total_periods, 5);
//! assert_eq!(result.total_interest, dec!(250));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod error;
pub mod types;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::BondCalculator;
    pub use crate::error::{BondCalcError, BondCalcResult};
    pub use crate::types::{
        BondParameters, BondStatus, CalculationResult, CashflowPeriod, CouponFrequency,
        PaymentType, ScheduleRow, YtmSource,
    };
}

// Re-export commonly used types at crate root
pub use calculator::{BondCalculator, MAX_PERIODS};
pub use error::{BondCalcError, BondCalcResult};
pub use types::{
    BondParameters, BondStatus, CalculationResult, CashflowPeriod, CouponFrequency, PaymentType,
    ScheduleRow, YtmSource,
};
