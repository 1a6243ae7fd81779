use std::ops::Range;

use crate::{
    catalog::{
        clock::{MINUTES_PER_DAY, WallClock},
        error::InvalidTime,
    },
    quantity::Minutes,
    tier::PriceTier,
};

/// Contiguous time range of a day tagged with a price tier.
///
/// When `end` is before `start`, the slot wraps past midnight and covers `[start, 24:00) ∪ [00:00, end)`.
/// A slot with `start == end` covers the full day, as does `00:00–24:00`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeSlot {
    pub tier: PriceTier,
    pub start: WallClock,
    pub end: WallClock,
    pub description: Option<String>,
}

impl TimeSlot {
    #[must_use]
    pub const fn new(tier: PriceTier, start: WallClock, end: WallClock) -> Self {
        Self { tier, start, end, description: None }
    }

    pub fn try_new(tier: PriceTier, start: &str, end: &str) -> Result<Self, InvalidTime> {
        Ok(Self::new(tier, start.parse()?, end.parse()?))
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn is_full_day(&self) -> bool {
        self.start.offset() == self.end.offset()
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Check whether the slot is active in the whole-hour bucket `hour`.
    ///
    /// Only the hour components are compared, minutes do not matter at this granularity.
    #[must_use]
    pub fn covers_hour(&self, hour: u32) -> bool {
        if self.is_full_day() {
            return true;
        }
        let (start, end) = (self.start.hour(), self.end.hour());
        if end < start {
            hour >= start || hour < end
        } else if start < end {
            (start..end).contains(&hour)
        } else if self.start < self.end {
            // Sub-hour slot like `10:15–10:45`:
            hour == start
        } else {
            // Wraps within the same hour, like `22:30–22:10`:
            true
        }
    }

    /// Covered minute ranges within `0..1440`, one range unless the slot wraps past midnight.
    pub fn spans(&self) -> impl Iterator<Item = Range<u16>> {
        let start = self.start.offset();
        let end = self.end.minute_of_day();
        let (head, tail) = if self.is_full_day() {
            (Some(0..MINUTES_PER_DAY), None)
        } else if start < end {
            (Some(start..end), None)
        } else {
            (Some(start..MINUTES_PER_DAY), (end != 0).then_some(0..end))
        };
        head.into_iter().chain(tail)
    }

    /// Covered duration, `(end - start) mod 24h`.
    #[must_use]
    pub fn duration(&self) -> Minutes {
        self.spans().map(|span| Minutes(u32::from(span.end - span.start))).sum()
    }

    /// Check whether the two slots share at least one minute.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.spans().any(|lhs| other.spans().any(|rhs| lhs.start < rhs.end && rhs.start < lhs.end))
    }
}
