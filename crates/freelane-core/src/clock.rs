//! Clock-of-day values and minute arithmetic.
//!
//! All scheduling math operates on wall-clock times of day with no date
//! or timezone component. Values serialize as "HH:MM" strings, the same
//! form the profile config stores.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// A wall-clock time of day (hour:minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time, validating hour and minute ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::InvalidValue {
                field: "hour".to_string(),
                message: format!("{hour} is not in 0..=23"),
            });
        }
        if minute > 59 {
            return Err(ValidationError::InvalidValue {
                field: "minute".to_string(),
                message: format!("{minute} is not in 0..=59"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(&self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }

    /// Build from a minute-of-day value, wrapping into a single day.
    pub fn from_minute_of_day(minutes: i32) -> Self {
        let m = minutes.rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    /// Add a signed number of minutes, wrapping past midnight.
    ///
    /// The date component is discarded; the schedule domain is single-day.
    pub fn add_minutes(self, minutes: i32) -> Self {
        Self::from_minute_of_day(self.minute_of_day() + minutes)
    }

    /// Signed minutes from `self` to `end`.
    ///
    /// Negative when `end` is earlier in the day; no wraparound correction
    /// is applied. Work windows are same-day by construction.
    pub fn minutes_until(self, end: ClockTime) -> i32 {
        end.minute_of_day() - self.minute_of_day()
    }

    /// Convert to a chrono `NaiveTime` (seconds zeroed) for comparison
    /// against an external wall clock.
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
            .expect("ClockTime invariant guarantees a valid NaiveTime")
    }

    /// Truncate a chrono `NaiveTime` to a clock time.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidValue {
            field: "clock_time".to_string(),
            message: format!("'{s}' is not a valid HH:MM time"),
        };

        let (hour_str, minute_str) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_str.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_round_trip() {
        assert_eq!(t("09:00").to_string(), "09:00");
        assert_eq!(t("23:59").to_string(), "23:59");
        assert_eq!(t("0:5").to_string(), "00:05");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("midnight".parse::<ClockTime>().is_err());
        assert!("12".parse::<ClockTime>().is_err());
    }

    #[test]
    fn add_minutes_advances() {
        assert_eq!(t("09:00").add_minutes(45), t("09:45"));
        assert_eq!(t("09:45").add_minutes(75), t("11:00"));
    }

    #[test]
    fn add_minutes_wraps_past_midnight() {
        assert_eq!(t("23:30").add_minutes(45), t("00:15"));
        assert_eq!(t("00:15").add_minutes(-30), t("23:45"));
    }

    #[test]
    fn minutes_until_is_signed() {
        assert_eq!(t("09:00").minutes_until(t("18:00")), 540);
        assert_eq!(t("18:00").minutes_until(t("09:00")), -540);
        assert_eq!(t("12:00").minutes_until(t("12:00")), 0);
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&t("08:30")).unwrap();
        assert_eq!(json, "\"08:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("08:30"));
    }
}
