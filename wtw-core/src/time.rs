//! Clock helpers: the hour used to resolve `time = current`.

use chrono::{Local, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{Result, WtwError};
use crate::normalize::{day_part, UNKNOWN_DAY_PART};

/// Timezone name meaning "use the system clock".
pub const LOCAL_TIMEZONE: &str = "local";

/// Where the current hour comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The system's local timezone.
    Local,
    /// An IANA timezone like "America/New_York".
    Zone(Tz),
    /// A pinned hour, for reproducible runs and tests.
    Fixed(u32),
}

impl Clock {
    /// Parse `local` or an IANA timezone name.
    pub fn from_timezone(tz: &str) -> Result<Self> {
        if tz.eq_ignore_ascii_case(LOCAL_TIMEZONE) {
            return Ok(Clock::Local);
        }
        tz.parse::<Tz>()
            .map(Clock::Zone)
            .map_err(|_| WtwError::InvalidTimezone(tz.to_string()))
    }

    pub fn hour(&self) -> u32 {
        match self {
            Clock::Local => Local::now().hour(),
            Clock::Zone(tz) => Utc::now().with_timezone(tz).hour(),
            Clock::Fixed(h) => *h,
        }
    }

    /// Current day-part token. The `unknown` sentinel becomes an error.
    pub fn day_part(&self) -> Result<&'static str> {
        let hour = self.hour();
        match day_part(hour) {
            UNKNOWN_DAY_PART => Err(WtwError::UnresolvedTime(hour)),
            part => Ok(part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezones() {
        assert_eq!(Clock::from_timezone("local"), Ok(Clock::Local));
        assert_eq!(
            Clock::from_timezone("America/Chicago"),
            Ok(Clock::Zone(chrono_tz::America::Chicago))
        );
        assert_eq!(
            Clock::from_timezone("Mars/Olympus_Mons"),
            Err(WtwError::InvalidTimezone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_fixed_clock_day_part() {
        assert_eq!(Clock::Fixed(5).day_part(), Ok("dawn"));
        assert_eq!(Clock::Fixed(12).day_part(), Ok("day"));
        assert_eq!(Clock::Fixed(23).day_part(), Ok("night"));
    }

    #[test]
    fn test_impossible_hour_is_an_error() {
        assert_eq!(Clock::Fixed(25).day_part(), Err(WtwError::UnresolvedTime(25)));
    }

    #[test]
    fn test_zone_clock_is_in_range() {
        let hour = Clock::Zone(chrono_tz::Asia::Tokyo).hour();
        assert!(hour < 24);
        assert!(Clock::Local.day_part().is_ok());
    }
}
