use std::collections::{BTreeMap, btree_map::Entry};

use bon::bon;

use crate::catalog::{
    error::IntegrityError,
    month::{MONTHS, MonthGroup, MonthRecord},
};

const DEFAULT_EXEMPTION_NOTE: &str = "该省份不执行分时电价政策";

#[derive(Clone, Debug)]
pub struct Region {
    name: String,
    time_of_use: bool,
    note: Option<String>,
    months: BTreeMap<u32, MonthRecord>,
}

#[bon]
impl Region {
    /// Assemble the region from month groups.
    ///
    /// A time-of-use region must define each month exactly once, an exempt region must define none.
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        #[builder(default = true)] time_of_use: bool,
        #[builder(into)] note: Option<String>,
        #[builder(default)] schedules: Vec<MonthGroup>,
    ) -> Result<Self, IntegrityError> {
        if !time_of_use && !schedules.is_empty() {
            return Err(IntegrityError::UnexpectedSchedules { region: name });
        }

        let mut months = BTreeMap::new();
        for group in schedules {
            if group.slots.is_empty() {
                return Err(IntegrityError::EmptySchedule { region: name });
            }
            for month in group.months {
                if !MONTHS.contains(&month) {
                    return Err(IntegrityError::InvalidMonth { region: name, month });
                }
                match months.entry(month) {
                    Entry::Occupied(_) => {
                        return Err(IntegrityError::DuplicateMonth { region: name, month });
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(MonthRecord::try_new(&name, month, group.slots.clone())?);
                    }
                }
            }
        }

        if time_of_use {
            let missing: Vec<u32> = MONTHS.filter(|month| !months.contains_key(month)).collect();
            if !missing.is_empty() {
                return Err(IntegrityError::MissingMonths { region: name, missing });
            }
        }

        Ok(Self { name, time_of_use, note, months })
    }
}

impl Region {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn uses_time_of_use_pricing(&self) -> bool {
        self.time_of_use
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Note to show for a region, with a generic explanation for exempt regions without one.
    #[must_use]
    pub fn note_or_default(&self) -> Option<&str> {
        match self.note() {
            Some(note) => Some(note),
            None if !self.time_of_use => Some(DEFAULT_EXEMPTION_NOTE),
            None => None,
        }
    }

    /// Look up the month record, `None` for exempt regions and unknown month numbers.
    #[must_use]
    pub fn month(&self, month: u32) -> Option<&MonthRecord> {
        self.months.get(&month)
    }

    /// Month records in calendar order.
    pub fn months(&self) -> impl Iterator<Item = &MonthRecord> {
        self.months.values()
    }
}
