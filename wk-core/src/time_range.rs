//! `HH:MM-HH:MM` tokens.
//!
//! Only the shape is validated: `25:00-26:00` or a range ending before it starts
//! are accepted, because entries stored with such values must keep displaying.

use crate::error::{Result, WkError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}-\d{1,2}:\d{2}$").unwrap());

/// A wall-clock reading rendered as zero-padded `HH:MM`.
///
/// Ordering is by hour, then minute, which matches the lexical order of the
/// canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Parses one or two hour digits, a colon and exactly two minute digits.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = CLOCK.captures(s)?;
        Some(Self {
            hour: caps[1].parse().ok()?,
            minute: caps[2].parse().ok()?,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    /// Parses `9:00-10:30` into `09:00` and `10:30`.
    ///
    /// Fails with [`WkError::InvalidTimeRange`] unless the input splits on `-` into
    /// exactly two non-empty parts, and with [`WkError::InvalidTimeFormat`] when a part
    /// is not a clock reading.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('-').map(str::trim).collect();
        let [start, end] = parts.as_slice() else {
            return Err(WkError::InvalidTimeRange(input.to_string()));
        };
        if start.is_empty() || end.is_empty() {
            return Err(WkError::InvalidTimeRange(input.to_string()));
        }
        match (ClockTime::parse(start), ClockTime::parse(end)) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(WkError::InvalidTimeFormat(input.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Whether `s` looks like a time range, used to tell an omitted day apart from a
/// day argument.
pub fn is_time_range(s: &str) -> bool {
    RANGE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(s: &str) -> (String, String) {
        let r = TimeRange::parse(s).unwrap();
        (r.start.to_string(), r.end.to_string())
    }

    #[test]
    fn canonical_ranges_pass_through() {
        assert_eq!(range("09:05-10:00"), ("09:05".into(), "10:00".into()));
        assert_eq!(range("14:00-16:00"), ("14:00".into(), "16:00".into()));
    }

    #[test]
    fn single_digit_hours_are_padded() {
        assert_eq!(range("9:00-10:00"), ("09:00".into(), "10:00".into()));
        assert_eq!(range("7:30-8:15"), ("07:30".into(), "08:15".into()));
    }

    #[test]
    fn minutes_need_two_digits() {
        assert!(matches!(
            TimeRange::parse("9:5-10:00"),
            Err(WkError::InvalidTimeFormat(s)) if s == "9:5-10:00"
        ));
        assert!(matches!(
            TimeRange::parse("09:00-10:0"),
            Err(WkError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn wrong_shape_is_a_range_error() {
        for bad in ["09:00", "09:00-10:00-11:00", "-10:00", "09:00-", ""] {
            assert!(
                matches!(TimeRange::parse(bad), Err(WkError::InvalidTimeRange(ref s)) if s == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn non_clock_parts_are_a_format_error() {
        assert!(matches!(
            TimeRange::parse("nine-ten"),
            Err(WkError::InvalidTimeFormat(_))
        ));
        assert!(matches!(
            TimeRange::parse("123:00-10:00"),
            Err(WkError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        assert_eq!(range("25:00-26:00"), ("25:00".into(), "26:00".into()));
        assert_eq!(range("10:00-09:00"), ("10:00".into(), "09:00".into()));
        assert_eq!(range("23:99-0:00"), ("23:99".into(), "00:00".into()));
    }

    #[test]
    fn clock_times_order_numerically() {
        let nine = ClockTime::parse("9:00").unwrap();
        let ten = ClockTime::parse("10:00").unwrap();
        let ten_thirty = ClockTime::parse("10:30").unwrap();
        assert!(nine < ten);
        assert!(ten < ten_thirty);
    }

    #[test]
    fn detects_time_range_tokens() {
        assert!(is_time_range("9:00-10:00"));
        assert!(is_time_range("09:00-10:00"));
        assert!(!is_time_range("monday"));
        assert!(!is_time_range("2025-02-10"));
        assert!(!is_time_range("9:0-10:00"));
    }
}
