//! Premium / discount / par classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Where a bond trades relative to its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondStatus {
    /// Market price above face value.
    Premium,
    /// Market price below face value.
    Discount,
    /// Market price equal to face value.
    Par,
}

impl BondStatus {
    /// Classifies a bond from its market price and face value.
    #[must_use]
    pub fn classify(market_price: Decimal, face_value: Decimal) -> Self {
        match market_price.cmp(&face_value) {
            Ordering::Greater => BondStatus::Premium,
            Ordering::Less => BondStatus::Discount,
            Ordering::Equal => BondStatus::Par,
        }
    }

    /// Returns the label used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BondStatus::Premium => "Premium",
            BondStatus::Discount => "Discount",
            BondStatus::Par => "Par",
        }
    }
}

impl fmt::Display for BondStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
