use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Whole minutes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Self = Self(0);
    pub const ONE_HOUR: Self = Self(60);
    pub const ONE_DAY: Self = Self(24 * 60);

    #[must_use]
    pub fn to_hours(self) -> Hours {
        Hours(f64::from(self.0) / 60.0)
    }
}

/// Fractional hours.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sum,
)]
pub struct Hours(pub f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 { write!(f, "{:.0}h", self.0) } else { write!(f, "{:.2}h", self.0) }
    }
}

/// Price relative to the flat tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, derive_more::From)]
pub struct PriceRatio(pub f64);

impl PriceRatio {
    pub const ZERO: Self = Self(0.0);
}

impl Display for PriceRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}×", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_hours() {
        assert_eq!(Minutes::ONE_DAY.to_hours(), Hours(24.0));
        assert_eq!(Minutes(90).to_hours(), Hours(1.5));
    }

    #[test]
    fn test_hours_display() {
        assert_eq!(Hours(8.0).to_string(), "8h");
        assert_eq!(Hours(7.5).to_string(), "7.50h");
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(PriceRatio(1.8).to_string(), "1.8×");
    }
}
