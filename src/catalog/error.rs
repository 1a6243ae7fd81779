use crate::catalog::clock::WallClock;

#[derive(Debug, thiserror::Error)]
#[error("invalid wall-clock time `{0}`, expected `HH:MM` within `00:00..=24:00`")]
pub struct InvalidTime(pub String);

/// Malformed catalog data, detected while the catalog is being built.
#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error(transparent)]
    InvalidTime(#[from] InvalidTime),

    #[error("region `{region}`: month {month} is outside of `1..=12`")]
    InvalidMonth { region: String, month: u32 },

    #[error("region `{region}`: month {month} is defined more than once")]
    DuplicateMonth { region: String, month: u32 },

    #[error("region `{region}` uses time-of-use pricing but misses months {missing:?}")]
    MissingMonths { region: String, missing: Vec<u32> },

    #[error("region `{region}` does not use time-of-use pricing but defines schedules")]
    UnexpectedSchedules { region: String },

    #[error("region `{region}`: a schedule has no time slots")]
    EmptySchedule { region: String },

    #[error(
        "region `{region}`, month {month}: slot {first_start}–{first_end} overlaps with {second_start}–{second_end}"
    )]
    OverlappingSlots {
        region: String,
        month: u32,
        first_start: WallClock,
        first_end: WallClock,
        second_start: WallClock,
        second_end: WallClock,
    },

    #[error("region `{0}` is defined more than once")]
    DuplicateRegion(String),

    #[error("failed to parse the catalog")]
    Parse(#[from] toml::de::Error),
}
