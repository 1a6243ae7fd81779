use std::ops::{Range, RangeInclusive};

use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    catalog::{
        clock::{MINUTES_PER_DAY, WallClock},
        error::IntegrityError,
        slot::TimeSlot,
    },
    resolver::{HourlyPrice, TierHours, aggregate_tier_hours, classify_hours},
    tier::PriceTier,
};

pub const MONTHS: RangeInclusive<u32> = 1..=12;

/// Time slots of a single month in a region.
#[derive(Clone, Debug)]
pub struct MonthRecord {
    month: u32,
    display_name: String,
    slots: Vec<TimeSlot>,

    /// Tiers used by at least one slot.
    tiers: EnumSet<PriceTier>,
}

impl MonthRecord {
    /// Build the record and make sure that no two slots overlap.
    pub(crate) fn try_new(
        region: &str,
        month: u32,
        slots: Vec<TimeSlot>,
    ) -> Result<Self, IntegrityError> {
        if let Some((first, second)) =
            slots.iter().tuple_combinations().find(|(first, second)| first.overlaps(second))
        {
            return Err(IntegrityError::OverlappingSlots {
                region: region.to_string(),
                month,
                first_start: first.start,
                first_end: first.end,
                second_start: second.start,
                second_end: second.end,
            });
        }
        Ok(Self {
            month,
            display_name: format!("{month}月"),
            tiers: slots.iter().map(|slot| slot.tier).collect(),
            slots,
        })
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    #[must_use]
    pub const fn tiers(&self) -> EnumSet<PriceTier> {
        self.tiers
    }

    #[must_use]
    pub fn has_sharp_peak(&self) -> bool {
        self.tiers.contains(PriceTier::SharpPeak)
    }

    #[must_use]
    pub fn has_deep_valley(&self) -> bool {
        self.tiers.contains(PriceTier::DeepValley)
    }

    /// Slots of the specified tier, in the catalog order.
    pub fn slots_of(&self, tier: PriceTier) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(move |slot| slot.tier == tier)
    }

    #[must_use]
    pub fn classify_hours(&self) -> [HourlyPrice; 24] {
        classify_hours(&self.slots)
    }

    #[must_use]
    pub fn tier_hours(&self) -> TierHours {
        aggregate_tier_hours(&self.slots)
    }

    /// Parts of the day that no slot covers, in chronological order.
    #[must_use]
    pub fn gaps(&self) -> Vec<Range<WallClock>> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for span in self.slots.iter().flat_map(TimeSlot::spans).sorted_by_key(|span| span.start) {
            if span.start > cursor {
                gaps.push(cursor..span.start);
            }
            cursor = cursor.max(span.end);
        }
        if cursor < MINUTES_PER_DAY {
            gaps.push(cursor..MINUTES_PER_DAY);
        }
        gaps.into_iter()
            .map(|gap| minute_to_clock(gap.start)..minute_to_clock(gap.end))
            .collect()
    }
}

fn minute_to_clock(minute: u16) -> WallClock {
    WallClock::from_hm(minute / 60, minute % 60).unwrap_or(WallClock::END_OF_DAY)
}

/// One slot list shared by several months of a region.
#[must_use]
#[derive(Clone, Debug)]
pub struct MonthGroup {
    pub months: Vec<u32>,
    pub slots: Vec<TimeSlot>,
}

impl MonthGroup {
    pub fn new(months: impl IntoIterator<Item = u32>, slots: Vec<TimeSlot>) -> Self {
        Self { months: months.into_iter().collect(), slots }
    }

    pub fn all_year(slots: Vec<TimeSlot>) -> Self {
        Self::new(MONTHS, slots)
    }
}
