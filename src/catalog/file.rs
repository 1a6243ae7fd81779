//! TOML representation of the catalog.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    catalog::{
        Catalog,
        clock::WallClock,
        error::IntegrityError,
        month::{MONTHS, MonthGroup},
        region::Region,
        slot::TimeSlot,
    },
    tier::PriceTier,
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    regions: Vec<RegionEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionEntry {
    name: String,

    #[serde(default = "default_time_of_use")]
    time_of_use: bool,

    #[serde(default)]
    note: Option<String>,

    #[serde(default)]
    schedules: Vec<ScheduleEntry>,
}

const fn default_time_of_use() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScheduleEntry {
    /// Months sharing the slots, all year round when omitted.
    #[serde(default)]
    months: Option<Vec<u32>>,

    slots: Vec<SlotEntry>,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SlotEntry {
    tier: PriceTier,

    #[serde_as(as = "DisplayFromStr")]
    start: WallClock,

    #[serde_as(as = "DisplayFromStr")]
    end: WallClock,

    #[serde(default)]
    description: Option<String>,
}

impl From<SlotEntry> for TimeSlot {
    fn from(entry: SlotEntry) -> Self {
        Self { tier: entry.tier, start: entry.start, end: entry.end, description: entry.description }
    }
}

impl From<ScheduleEntry> for MonthGroup {
    fn from(entry: ScheduleEntry) -> Self {
        let slots = entry.slots.into_iter().map(TimeSlot::from).collect();
        match entry.months {
            Some(months) => Self::new(months, slots),
            None => Self::new(MONTHS, slots),
        }
    }
}

impl TryFrom<RegionEntry> for Region {
    type Error = IntegrityError;

    fn try_from(entry: RegionEntry) -> Result<Self, Self::Error> {
        Self::builder()
            .name(entry.name)
            .time_of_use(entry.time_of_use)
            .maybe_note(entry.note)
            .schedules(entry.schedules.into_iter().map(MonthGroup::from).collect())
            .build()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = IntegrityError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        file.regions.into_iter().map(Region::try_from).collect::<Result<_, _>>().and_then(Self::try_new)
    }
}
