use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::quantity::PriceRatio;

/// Price tier of a time-of-use tariff.
///
/// Variants are declared from the cheapest to the most expensive one,
/// so that [`PriceTier::rank`] follows the declaration order.
#[derive(Debug, Deserialize, Serialize, enumset::EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
    /// Lowest price, only some regions and months.
    #[serde(alias = "深谷")]
    DeepValley,

    #[serde(alias = "低谷")]
    Valley,

    /// The reference price.
    #[serde(alias = "平段")]
    Flat,

    #[serde(alias = "高峰")]
    Peak,

    /// Highest price, usually a summer or winter evening window.
    #[serde(alias = "尖峰")]
    SharpPeak,
}

impl PriceTier {
    /// All tiers from the most expensive to the cheapest one.
    pub const DESCENDING: [Self; 5] =
        [Self::SharpPeak, Self::Peak, Self::Flat, Self::Valley, Self::DeepValley];

    /// Position in the price order, `0` being the cheapest tier.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Compare by price.
    #[must_use]
    pub fn cmp_price(self, other: Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Price relative to [`PriceTier::Flat`].
    #[must_use]
    pub const fn ratio(self) -> PriceRatio {
        match self {
            Self::SharpPeak => PriceRatio(1.8),
            Self::Peak => PriceRatio(1.5),
            Self::Flat => PriceRatio(1.0),
            Self::Valley => PriceRatio(0.5),
            Self::DeepValley => PriceRatio(0.3),
        }
    }

    /// Chart color as a CSS hex string.
    #[must_use]
    pub const fn hex_color(self) -> &'static str {
        match self {
            Self::SharpPeak => "#ef4444",
            Self::Peak => "#f97316",
            Self::Flat => "#22c55e",
            Self::Valley => "#3b82f6",
            Self::DeepValley => "#6366f1",
        }
    }

    /// Closest terminal color to [`PriceTier::hex_color`].
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::SharpPeak => Color::Red,
            Self::Peak => Color::DarkYellow,
            Self::Flat => Color::Green,
            Self::Valley => Color::Blue,
            Self::DeepValley => Color::Magenta,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SharpPeak => "尖峰",
            Self::Peak => "高峰",
            Self::Flat => "平段",
            Self::Valley => "低谷",
            Self::DeepValley => "深谷",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SharpPeak => "尖峰电价",
            Self::Peak => "高峰电价",
            Self::Flat => "平段电价",
            Self::Valley => "低谷电价",
            Self::DeepValley => "深谷电价",
        }
    }

    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::SharpPeak => "最高电价时段",
            Self::Peak => "用电高峰时段",
            Self::Flat => "正常电价时段",
            Self::Valley => "用电低谷时段",
            Self::DeepValley => "最低电价时段",
        }
    }
}

impl Display for PriceTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        for (higher, lower) in PriceTier::DESCENDING.iter().zip(&PriceTier::DESCENDING[1..]) {
            assert_eq!(higher.cmp_price(*lower), Ordering::Greater);
            assert!(higher.ratio() > lower.ratio());
        }
    }

    #[test]
    fn test_flat_is_reference() {
        assert_eq!(PriceTier::Flat.ratio(), PriceRatio(1.0));
    }

    #[test]
    fn test_deserialize_aliases() -> anyhow::Result<()> {
        #[derive(Deserialize)]
        struct Wrapper {
            tier: PriceTier,
        }

        assert_eq!(toml::from_str::<Wrapper>(r#"tier = "sharp-peak""#)?.tier, PriceTier::SharpPeak);
        assert_eq!(toml::from_str::<Wrapper>(r#"tier = "深谷""#)?.tier, PriceTier::DeepValley);
        assert!(toml::from_str::<Wrapper>(r#"tier = "super-peak""#).is_err());
        Ok(())
    }
}
