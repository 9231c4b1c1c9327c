//! ISO-style week keys (`2025-W06`) and the calendar arithmetic around them.
//!
//! Week numbers roll over at 52 in both directions. Years with a 53rd ISO week
//! are not special-cased: a key for week 53 can be produced from a real date,
//! but navigating forward from it lands on week 1 of the following year, and
//! navigating backward from week 1 always lands on week 52. Stored week keys
//! depend on this, so it is kept as is.

use crate::days::Day;
use crate::error::{Result, WkError};
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const LAST_WEEK_OF_YEAR: u32 = 52;
const FIRST_YEAR: i32 = 0;
const LAST_YEAR: i32 = 9999;

static WEEK_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-W(\d{2})$").unwrap());

/// Identifies one Monday-starting week as `YYYY-W##`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    year: i32,
    week: u32,
}

impl WeekKey {
    /// The ISO week `date` falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// The following week. Stays put at the end of year 9999, the last one a key can name.
    pub fn next(self) -> Self {
        if self.week + 1 > LAST_WEEK_OF_YEAR {
            if self.year >= LAST_YEAR {
                return self;
            }
            Self {
                year: self.year + 1,
                week: 1,
            }
        } else {
            Self {
                year: self.year,
                week: self.week + 1,
            }
        }
    }

    /// The preceding week. Stays put at the start of year 0000.
    pub fn prev(self) -> Self {
        if self.week <= 1 {
            if self.year <= FIRST_YEAR {
                return self;
            }
            Self {
                year: self.year - 1,
                week: LAST_WEEK_OF_YEAR,
            }
        } else {
            Self {
                year: self.year,
                week: self.week - 1,
            }
        }
    }

    /// The Monday that begins this week.
    ///
    /// Takes the Monday on or before January 1st of the key's year and adds
    /// `week - 1` whole weeks.
    pub fn monday(self) -> NaiveDate {
        let jan1 = NaiveDate::from_ymd_opt(self.year, 1, 1).expect("four digit year");
        let back = jan1.weekday().num_days_from_monday() as i64;
        let first_monday = jan1 - Duration::days(back);
        first_monday + Duration::days((self.week as i64 - 1) * 7)
    }

    /// Calendar date of `day` within this week.
    pub fn date_of(self, day: Day) -> NaiveDate {
        self.monday() + Duration::days(day.offset())
    }

    /// Monday and Sunday of this week.
    pub fn date_range(self) -> (NaiveDate, NaiveDate) {
        let monday = self.monday();
        (monday, monday + Duration::days(6))
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = WkError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let caps = WEEK_KEY
            .captures(input)
            .ok_or_else(|| WkError::InvalidWeek(input.to_string()))?;
        let year: i32 = caps[1]
            .parse()
            .map_err(|_| WkError::InvalidWeek(input.to_string()))?;
        let week: u32 = caps[2]
            .parse()
            .map_err(|_| WkError::InvalidWeek(input.to_string()))?;
        if !(1..=53).contains(&week) {
            return Err(WkError::InvalidWeek(input.to_string()));
        }
        Ok(Self { year, week })
    }
}

/// Which week a listing refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelector {
    Current,
    Last,
    Next,
    Explicit(WeekKey),
}

impl WeekSelector {
    pub fn resolve(self, today: NaiveDate) -> WeekKey {
        let current = WeekKey::from_date(today);
        match self {
            WeekSelector::Current => current,
            WeekSelector::Last => current.prev(),
            WeekSelector::Next => current.next(),
            WeekSelector::Explicit(week) => week,
        }
    }
}
