//! Error types for the calculation engine.
//!
//! The engine does not validate caller input; these errors signal that an
//! internal contract the engine relies on was not met.

use thiserror::Error;

/// A specialized Result type for engine operations.
pub type BondCalcResult<T> = Result<T, BondCalcError>;

/// The error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondCalcError {
    /// A derived value broke an invariant the engine depends on.
    #[error("Business rule violated: {reason}")]
    BusinessRule {
        /// Description of the broken rule.
        reason: String,
    },

    /// Coupon frequency outside the supported set.
    #[error("Invalid coupon frequency: {value} (expected 1, 2, 4 or 12)")]
    InvalidFrequency {
        /// The rejected payments-per-year value.
        value: u32,
    },

    /// A payment date could not be represented.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl BondCalcError {
    /// Creates a business rule error.
    #[must_use]
    pub fn business_rule(reason: impl Into<String>) -> Self {
        Self::BusinessRule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
