//! Calendar months in `YYYY-MM` form plus the German labels the dashboard
//! renders them with.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Long German month names, indexed by `month - 1`.
pub const MONTH_NAMES_LONG: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Abbreviated German month names, indexed by `month - 1`.
pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// A calendar month such as `2024-03`.
///
/// Orders chronologically and serializes as the `YYYY-MM` string used
/// throughout the dataset files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthKeyError {
    #[error("month key {0:?} is not in YYYY-MM form")]
    Malformed(String),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based calendar month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Long German name, e.g. `März`.
    pub fn long_name(&self) -> &'static str {
        MONTH_NAMES_LONG[(self.month - 1) as usize]
    }

    /// Abbreviated label with year, e.g. `Mär 2024`.
    pub fn short_label(&self) -> String {
        format!("{} {}", MONTH_NAMES_SHORT[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(raw.to_string());
        let (year, month) = raw.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Formats a date the way the dashboard prints it, e.g. `5. Mär 2024`.
pub fn format_date_german(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        MONTH_NAMES_SHORT[(date.month() - 1) as usize],
        date.year()
    )
}
