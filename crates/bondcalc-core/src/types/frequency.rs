//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BondCalcError;

/// Number of coupon payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CouponFrequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl CouponFrequency {
    /// All supported frequencies, in ascending order of payments per year.
    pub const ALL: [CouponFrequency; 4] = [
        CouponFrequency::Annual,
        CouponFrequency::SemiAnnual,
        CouponFrequency::Quarterly,
        CouponFrequency::Monthly,
    ];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CouponFrequency::Annual => 1,
            CouponFrequency::SemiAnnual => 2,
            CouponFrequency::Quarterly => 4,
            CouponFrequency::Monthly => 12,
        }
    }

    /// Returns the number of calendar months advanced by `period` whole periods.
    ///
    /// Computed as `floor(period * 12 / periods_per_year)`. Every supported
    /// frequency divides 12, so the floor never discards a fraction here.
    #[must_use]
    pub fn months_after(&self, period: u32) -> u32 {
        period * 12 / self.periods_per_year()
    }
}

impl TryFrom<u32> for CouponFrequency {
    type Error = BondCalcError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.periods_per_year() == value)
            .ok_or(BondCalcError::InvalidFrequency { value })
    }
}

impl From<CouponFrequency> for u32 {
    fn from(freq: CouponFrequency) -> Self {
        freq.periods_per_year()
    }
}

impl fmt::Display for CouponFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CouponFrequency::Annual => "Annual",
            CouponFrequency::SemiAnnual => "Semi-Annual",
            CouponFrequency::Quarterly => "Quarterly",
            CouponFrequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(CouponFrequency::Annual.periods_per_year(), 1);
        assert_eq!(CouponFrequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(CouponFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CouponFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_try_from_supported_values() {
        for freq in CouponFrequency::ALL {
            let n = u32::from(freq);
            assert_eq!(CouponFrequency::try_from(n).unwrap(), freq);
        }
    }

    #[test]
    fn test_try_from_rejects_unsupported() {
        for n in [0, 3, 6, 24] {
            assert_eq!(
                CouponFrequency::try_from(n),
                Err(BondCalcError::InvalidFrequency { value: n })
            );
        }
    }

    #[test]
    fn test_months_after() {
        assert_eq!(CouponFrequency::Annual.months_after(3), 36);
        assert_eq!(CouponFrequency::SemiAnnual.months_after(3), 18);
        assert_eq!(CouponFrequency::Quarterly.months_after(3), 9);
        assert_eq!(CouponFrequency::Monthly.months_after(3), 3);
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&CouponFrequency::Quarterly).unwrap();
        assert_eq!(json, "4");

        let parsed: CouponFrequency = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, CouponFrequency::Monthly);

        assert!(serde_json::from_str::<CouponFrequency>("3").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CouponFrequency::SemiAnnual.to_string(), "Semi-Annual");
    }
}
