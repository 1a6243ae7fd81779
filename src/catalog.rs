//! Static, read-only time-of-use schedules of regions.

pub mod clock;
pub mod error;
mod file;
pub mod month;
pub mod region;
pub mod slot;

use std::{fmt::Debug, fs, path::Path};

use itertools::Itertools;

pub use self::{
    clock::WallClock,
    error::{IntegrityError, InvalidTime},
    file::CatalogFile,
    month::{MonthGroup, MonthRecord},
    region::Region,
    slot::TimeSlot,
};
use crate::prelude::*;

const BUILTIN: &str = include_str!("../data/catalog.toml");

/// Immutable collection of regions in display order.
#[derive(Clone, Debug)]
pub struct Catalog {
    regions: Vec<Region>,
}

/// Part of a day that no slot covers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoverageGap {
    pub region: String,
    pub month: u32,
    pub start: WallClock,
    pub end: WallClock,
}

impl Catalog {
    /// Build the catalog, region names must be unique.
    pub fn try_new(regions: Vec<Region>) -> Result<Self, IntegrityError> {
        if let Some(name) = regions.iter().map(Region::name).duplicates().next() {
            return Err(IntegrityError::DuplicateRegion(name.to_string()));
        }
        Ok(Self { regions })
    }

    /// Catalog compiled into the binary.
    #[instrument(name = "Loading the built-in catalog…", skip_all)]
    pub fn builtin() -> Result<Self, IntegrityError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, IntegrityError> {
        let catalog = Self::try_from(toml::from_str::<CatalogFile>(text)?)?;
        debug!(n_regions = catalog.regions.len(), "loaded the catalog");
        Ok(catalog)
    }

    #[instrument(name = "Reading the catalog…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid catalog `{}`", path.display()))
    }

    /// Region names in display order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(Region::name)
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Exact-match lookup by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name() == name)
    }

    /// Look up the month record of a region.
    ///
    /// `None` when the region is unknown, exempt from time-of-use pricing, or the month is outside `1..=12`.
    #[must_use]
    pub fn month(&self, region: &str, month: u32) -> Option<&MonthRecord> {
        self.region(region)?.month(month)
    }

    /// Find every part of a day left uncovered in any month of any region.
    #[must_use]
    pub fn audit(&self) -> Vec<CoverageGap> {
        self.regions
            .iter()
            .flat_map(|region| {
                region.months().flat_map(move |record| {
                    record.gaps().into_iter().map(move |gap| CoverageGap {
                        region: region.name().to_string(),
                        month: record.month(),
                        start: gap.start,
                        end: gap.end,
                    })
                })
            })
            .collect()
    }
}
