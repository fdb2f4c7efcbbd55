//! Time range selection over the monthly score series.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ScoreRecord;
use crate::month::MonthKey;

/// The range choices offered by the dashboard, in display order.
pub const RANGE_CHOICES: [TimeRange; 4] = [
    TimeRange::All,
    TimeRange::LastMonths(36),
    TimeRange::LastMonths(12),
    TimeRange::LastMonths(6),
];

/// How much of the series is visible: everything, or the last `n` months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    All,
    LastMonths(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("time range {0:?} is neither \"all\" nor a positive month count")]
pub struct ParseRangeError(String);

impl TimeRange {
    /// Parses a range string, falling back to [`TimeRange::All`] on
    /// malformed input. The fallback is logged, not surfaced.
    pub fn parse_or_all(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err| {
            tracing::warn!(target: "monitor_core::range", %err, "range.fallback_all");
            TimeRange::All
        })
    }

    /// The last `n` score records, or all of them for [`TimeRange::All`]
    /// and for windows at least as long as the series.
    pub fn slice<'a>(&self, scores: &'a [ScoreRecord]) -> &'a [ScoreRecord] {
        match *self {
            TimeRange::All => scores,
            TimeRange::LastMonths(n) => {
                let start = scores.len().saturating_sub(n);
                &scores[start..]
            }
        }
    }

    /// Months visible under this range, or `None` when every month is.
    /// Documents are filtered against this window, so a document whose
    /// month has no score record drops out of ranged views.
    pub fn window_months(&self, scores: &[ScoreRecord]) -> Option<Vec<MonthKey>> {
        match *self {
            TimeRange::All => None,
            TimeRange::LastMonths(_) => {
                Some(self.slice(scores).iter().map(|record| record.month).collect())
            }
        }
    }

    /// Label for the range selector, e.g. `Alle` or `12 Monate`.
    pub fn tab_label(&self) -> String {
        match *self {
            TimeRange::All => "Alle".to_string(),
            TimeRange::LastMonths(n) => format!("{n} Monate"),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimeRange::All => write!(f, "all"),
            TimeRange::LastMonths(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ParseRangeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(TimeRange::All);
        }
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(TimeRange::LastMonths(n)),
            _ => Err(ParseRangeError(raw.to_string())),
        }
    }
}
