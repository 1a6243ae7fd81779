use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{catalog::error::InvalidTime, quantity::Minutes};

/// Wall-clock time of a day on a 24-hour cycle, `00:00..=24:00`.
///
/// `24:00` is the end of the day and is equivalent to `00:00` when used as a start.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WallClock(u16);

impl WallClock {
    pub const MIDNIGHT: Self = Self(0);
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    #[must_use]
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 || hour > 24 || (hour == 24 && minute != 0) {
            None
        } else {
            Some(Self(hour * 60 + minute))
        }
    }

    /// Hour component, `24` for the end of the day.
    #[must_use]
    pub const fn hour(self) -> u32 {
        (self.0 / 60) as u32
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        (self.0 % 60) as u32
    }

    /// Minutes since midnight, `1440` for the end of the day.
    #[must_use]
    pub const fn minute_of_day(self) -> u16 {
        self.0
    }

    /// Minutes since midnight with the end of the day folded onto midnight.
    #[must_use]
    pub const fn offset(self) -> u16 {
        self.0 % MINUTES_PER_DAY
    }

    #[must_use]
    pub const fn since_midnight(self) -> Minutes {
        Minutes(self.0 as u32)
    }
}

pub(crate) const MINUTES_PER_DAY: u16 = 24 * 60;

impl FromStr for WallClock {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.is_empty()
            || hour.len() > 2
            || minute.len() != 2
            || !hour.bytes().chain(minute.bytes()).all(|byte| byte.is_ascii_digit())
        {
            return Err(invalid());
        }
        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Display for WallClock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() -> Result<(), InvalidTime> {
        assert_eq!("07:30".parse::<WallClock>()?, WallClock(450));
        assert_eq!("7:05".parse::<WallClock>()?, WallClock(425));
        assert_eq!("00:00".parse::<WallClock>()?, WallClock::MIDNIGHT);
        assert_eq!("24:00".parse::<WallClock>()?, WallClock::END_OF_DAY);
        Ok(())
    }

    #[test]
    fn test_parse_err() {
        for text in ["", "7", "07:3", "24:30", "25:00", "12:60", "-1:00", "+1:00", "12:00:00", "ab:cd"] {
            assert!(text.parse::<WallClock>().is_err(), "`{text}` must be rejected");
        }
    }

    #[test]
    fn test_components() -> Result<(), InvalidTime> {
        let time = "22:45".parse::<WallClock>()?;
        assert_eq!(time.hour(), 22);
        assert_eq!(time.minute(), 45);
        assert_eq!(WallClock::END_OF_DAY.hour(), 24);
        assert_eq!(WallClock::END_OF_DAY.offset(), 0);
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(WallClock(0).to_string(), "00:00");
        assert_eq!(WallClock(1439).to_string(), "23:59");
        assert_eq!(WallClock::END_OF_DAY.to_string(), "24:00");
    }
}
