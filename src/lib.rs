#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod prelude;
pub mod quantity;
pub mod resolver;
pub mod tier;

pub use crate::{
    catalog::{Catalog, CoverageGap, IntegrityError, MonthGroup, MonthRecord, Region, TimeSlot, WallClock},
    quantity::{Hours, Minutes, PriceRatio},
    resolver::{HourlyPrice, TierHours, aggregate_tier_hours, classify_hours, slot_at},
    tier::PriceTier,
};
