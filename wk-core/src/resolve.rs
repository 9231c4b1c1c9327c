//! Turns user day tokens into a `(week, day)` bucket.

use crate::clock::Clock;
use crate::days::Day;
use crate::error::{Result, WkError};
use crate::week::WeekKey;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use tracing::debug;

/// The token that stands for the current local date.
pub const TODAY: &str = "today";

static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// The bucket an entry is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySlot {
    pub week: WeekKey,
    pub day: Day,
}

impl DaySlot {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            week: WeekKey::from_date(date),
            day: Day::from_weekday(date.weekday()),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.week.date_of(self.day)
    }
}

/// Resolves a day token against `clock`.
///
/// Accepted, case-insensitively and in this order:
/// 1. `today`
/// 2. an explicit `YYYY-MM-DD` date
/// 3. a weekday name of the current week, or of the next week when prefixed with `+`
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use wk_core::clock::FixedClock;
/// # use wk_core::days::Day;
/// # use wk_core::resolve::resolve_day;
/// let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
///
/// let slot = resolve_day("+Friday", &clock).unwrap();
/// assert_eq!(slot.week.to_string(), "2025-W07");
/// assert_eq!(slot.day, Day::Friday);
/// ```
pub fn resolve_day(input: &str, clock: &dyn Clock) -> Result<DaySlot> {
    let token = input.trim().to_lowercase();

    if token == TODAY {
        return Ok(DaySlot::from_date(clock.today()));
    }

    if DATE_TOKEN.is_match(&token) {
        let date = NaiveDate::parse_from_str(&token, "%Y-%m-%d")
            .map_err(|_| WkError::InvalidDate(token.clone()))?;
        return Ok(DaySlot::from_date(date));
    }

    let (next_week, name) = match token.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, token.as_str()),
    };
    let day = Day::from_str(name).map_err(|_| WkError::InvalidDay(name.to_string()))?;

    let mut week = WeekKey::from_date(clock.today());
    if next_week {
        week = week.next();
    }
    debug!(%token, %week, %day, "resolved day token");
    Ok(DaySlot { week, day })
}

/// Whether `s` is a day token at all, used to tell an omitted day apart from the
/// first word of free text.
pub fn is_day_token(s: &str) -> bool {
    let token = s.trim().to_lowercase();
    if token == TODAY || DATE_TOKEN.is_match(&token) {
        return true;
    }
    let name = token.strip_prefix('+').unwrap_or(&token);
    Day::from_str(name).is_ok()
}
