//! Hour classification and tier duration aggregation over a month's slots.
//!
//! All functions are pure: the same slots always give the same result.

use std::{
    array,
    fmt::{Display, Formatter},
    ops::Index,
};

use serde::{Serialize, Serializer};
use serde_with::SerializeDisplay;

use crate::{
    catalog::TimeSlot,
    quantity::{Hours, Minutes, PriceRatio},
    tier::PriceTier,
};

/// First slot in the list order that covers the whole-hour bucket.
#[must_use]
pub fn slot_at(slots: &[TimeSlot], hour: u32) -> Option<&TimeSlot> {
    slots.iter().find(|slot| slot.covers_hour(hour))
}

/// Resolve the tier of each hour of a day, index being the hour.
#[must_use]
pub fn classify_hours(slots: &[TimeSlot]) -> [HourlyPrice; 24] {
    array::from_fn(|hour| {
        #[expect(clippy::cast_possible_truncation)]
        let hour = hour as u32;
        let tier = slot_at(slots, hour).map(|slot| slot.tier);
        HourlyPrice {
            hour,
            label: HourLabel(hour),
            tier,
            ratio: tier.map_or(PriceRatio::ZERO, PriceTier::ratio),
        }
    })
}

/// Sum up slot durations per tier.
#[must_use]
pub fn aggregate_tier_hours(slots: &[TimeSlot]) -> TierHours {
    let mut totals = TierHours::default();
    for slot in slots {
        totals.add(slot.tier, slot.duration());
    }
    totals
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HourlyPrice {
    pub hour: u32,
    pub label: HourLabel,

    /// `None` when no slot covers the hour.
    pub tier: Option<PriceTier>,

    /// Tier ratio, or zero when no slot covers the hour.
    pub ratio: PriceRatio,
}

/// Hour formatted as `HH:00`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SerializeDisplay)]
pub struct HourLabel(pub u32);

impl Display for HourLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Covered time per tier, zero for the tiers that a month does not use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TierHours([Minutes; 5]);

impl TierHours {
    pub fn add(&mut self, tier: PriceTier, duration: Minutes) {
        self.0[tier.rank()] += duration;
    }

    #[must_use]
    pub fn get(&self, tier: PriceTier) -> Hours {
        self[tier].to_hours()
    }

    /// All tiers from the most expensive one, including zero totals.
    pub fn iter(&self) -> impl Iterator<Item = (PriceTier, Hours)> + '_ {
        PriceTier::DESCENDING.into_iter().map(|tier| (tier, self.get(tier)))
    }

    /// Tiers with a positive total, from the most expensive one.
    pub fn nonzero(&self) -> impl Iterator<Item = (PriceTier, Hours)> + '_ {
        PriceTier::DESCENDING
            .into_iter()
            .filter(|tier| self[*tier] != Minutes::ZERO)
            .map(|tier| (tier, self.get(tier)))
    }

    #[must_use]
    pub fn total(&self) -> Hours {
        self.0.iter().copied().sum::<Minutes>().to_hours()
    }
}

impl Index<PriceTier> for TierHours {
    type Output = Minutes;

    fn index(&self, tier: PriceTier) -> &Self::Output {
        &self.0[tier.rank()]
    }
}

impl Serialize for TierHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    fn slot(tier: PriceTier, start: &str, end: &str) -> Result<TimeSlot> {
        Ok(TimeSlot::try_new(tier, start, end)?)
    }

    /// Beijing, July.
    fn summer() -> Result<Vec<TimeSlot>> {
        Ok(vec![
            slot(PriceTier::SharpPeak, "11:00", "13:00")?,
            slot(PriceTier::SharpPeak, "16:00", "17:00")?,
            slot(PriceTier::Peak, "10:00", "11:00")?,
            slot(PriceTier::Peak, "17:00", "22:00")?,
            slot(PriceTier::Flat, "07:00", "10:00")?,
            slot(PriceTier::Flat, "13:00", "16:00")?,
            slot(PriceTier::Flat, "22:00", "23:00")?,
            slot(PriceTier::Valley, "23:00", "07:00")?,
        ])
    }

    #[test]
    fn test_classify_hours() -> Result {
        let hours = classify_hours(&summer()?);
        for (index, price) in hours.iter().enumerate() {
            assert_eq!(price.hour as usize, index);
        }
        assert_eq!(hours[0].tier, Some(PriceTier::Valley));
        assert_eq!(hours[6].tier, Some(PriceTier::Valley));
        assert_eq!(hours[7].tier, Some(PriceTier::Flat));
        assert_eq!(hours[10].tier, Some(PriceTier::Peak));
        assert_eq!(hours[12].tier, Some(PriceTier::SharpPeak));
        assert_eq!(hours[23].tier, Some(PriceTier::Valley));
        assert_eq!(hours[12].ratio, PriceRatio(1.8));
        assert_eq!(hours[0].ratio, PriceRatio(0.5));
        assert_eq!(hours[7].label.to_string(), "07:00");
        Ok(())
    }

    #[test]
    fn test_each_hour_matches_exactly_one_slot() -> Result {
        let slots = summer()?;
        for hour in 0..24 {
            let matching: Vec<_> = slots.iter().filter(|slot| slot.covers_hour(hour)).collect();
            assert_eq!(matching.len(), 1, "hour {hour}");
            assert_eq!(classify_hours(&slots)[hour as usize].tier, Some(matching[0].tier));
        }
        Ok(())
    }

    #[test]
    fn test_uncovered_hours() -> Result {
        let hours = classify_hours(&[slot(PriceTier::Peak, "10:00", "12:00")?]);
        assert_eq!(hours[9].tier, None);
        assert_eq!(hours[9].ratio, PriceRatio::ZERO);
        assert_eq!(hours[10].tier, Some(PriceTier::Peak));
        assert_eq!(hours[12].tier, None);
        Ok(())
    }

    #[test]
    fn test_first_match_wins() -> Result {
        let hours = classify_hours(&[
            slot(PriceTier::SharpPeak, "17:00", "19:00")?,
            slot(PriceTier::Peak, "16:00", "24:00")?,
        ]);
        assert_eq!(hours[16].tier, Some(PriceTier::Peak));
        assert_eq!(hours[17].tier, Some(PriceTier::SharpPeak));
        assert_eq!(hours[19].tier, Some(PriceTier::Peak));
        Ok(())
    }

    #[test]
    fn test_wrapping_slot() -> Result {
        let slots = [slot(PriceTier::Valley, "22:00", "06:00")?];
        let covered: Vec<_> = classify_hours(&slots)
            .iter()
            .filter(|price| price.tier == Some(PriceTier::Valley))
            .map(|price| price.hour)
            .collect();
        assert_eq!(covered, vec![0, 1, 2, 3, 4, 5, 22, 23]);
        assert_abs_diff_eq!(aggregate_tier_hours(&slots).get(PriceTier::Valley).0, 8.0);
        Ok(())
    }

    #[test]
    fn test_full_day_slot() -> Result {
        let slots = [slot(PriceTier::Flat, "00:00", "24:00")?];
        assert!(classify_hours(&slots).iter().all(|price| price.tier == Some(PriceTier::Flat)));
        assert_abs_diff_eq!(aggregate_tier_hours(&slots).total().0, 24.0);
        Ok(())
    }

    #[test]
    fn test_aggregate_tier_hours() -> Result {
        let totals = aggregate_tier_hours(&summer()?);
        assert_abs_diff_eq!(totals.get(PriceTier::SharpPeak).0, 3.0);
        assert_abs_diff_eq!(totals.get(PriceTier::Peak).0, 6.0);
        assert_abs_diff_eq!(totals.get(PriceTier::Flat).0, 7.0);
        assert_abs_diff_eq!(totals.get(PriceTier::Valley).0, 8.0);
        assert_abs_diff_eq!(totals.get(PriceTier::DeepValley).0, 0.0);
        assert_abs_diff_eq!(totals.total().0, 24.0);
        Ok(())
    }

    #[test]
    fn test_aggregate_minutes_sum_exactly() -> Result {
        let totals = aggregate_tier_hours(&[
            slot(PriceTier::Peak, "07:07", "11:13")?,
            slot(PriceTier::Flat, "11:13", "19:59")?,
            slot(PriceTier::DeepValley, "19:59", "07:07")?,
        ]);
        assert_eq!(totals.total(), Hours(24.0));
        Ok(())
    }

    #[test]
    fn test_nonzero_order() -> Result {
        let totals = aggregate_tier_hours(&summer()?);
        let tiers: Vec<_> = totals.nonzero().map(|(tier, _)| tier).collect();
        assert_eq!(
            tiers,
            vec![PriceTier::SharpPeak, PriceTier::Peak, PriceTier::Flat, PriceTier::Valley]
        );
        assert_eq!(totals.iter().count(), 5);
        Ok(())
    }

    #[test]
    fn test_idempotence() -> Result {
        let slots = summer()?;
        assert_eq!(classify_hours(&slots), classify_hours(&slots));
        assert_eq!(
            serde_json::to_string(&classify_hours(&slots))?,
            serde_json::to_string(&classify_hours(&slots))?,
        );
        assert_eq!(aggregate_tier_hours(&slots), aggregate_tier_hours(&slots));
        Ok(())
    }

    #[test]
    fn test_serialize() -> Result {
        let hours = classify_hours(&[slot(PriceTier::SharpPeak, "00:00", "01:00")?]);
        assert_eq!(
            serde_json::to_value(hours[0])?,
            serde_json::json!({ "hour": 0, "label": "00:00", "tier": "sharp-peak", "ratio": 1.8 }),
        );
        assert_eq!(
            serde_json::to_value(hours[1])?,
            serde_json::json!({ "hour": 1, "label": "01:00", "tier": null, "ratio": 0.0 }),
        );
        Ok(())
    }
}
