//! Data model for the pre-baked monitor dataset.
//!
//! Everything here is read-only after load: the dashboard selects, filters
//! and sorts views over these records but never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// One month of the aggregated discourse score for an MP, with the
/// confidence interval the chart shades around the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub month: MonthKey,
    pub score: f64,
    pub lower: f64,
    pub upper: f64,
}

/// A single scored parliamentary document (speech, motion, question).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub label: String,
    pub month: MonthKey,
    pub date: NaiveDate,
    pub score: f64,
}

/// A member of parliament with their monthly series and document list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mp {
    pub id: String,
    pub name: String,
    pub party: String,
    pub scores: Vec<ScoreRecord>,
    pub documents: Vec<Document>,
}

impl Mp {
    /// Label shown in the MP selector, e.g. `Ole Petersen (SPD)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.party)
    }
}

/// The full dataset: all MPs available in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorData {
    pub mps: Vec<Mp>,
}

impl MonitorData {
    pub fn mp(&self, id: &str) -> Option<&Mp> {
        self.mps.iter().find(|mp| mp.id == id)
    }

    /// Position of an MP in the dataset order, used for selector cycling.
    pub fn mp_index(&self, id: &str) -> Option<usize> {
        self.mps.iter().position(|mp| mp.id == id)
    }
}

/// Severity bucket derived from a document score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Buckets a score: below 0.2 is low, below 0.5 medium, otherwise high.
    pub fn for_score(score: f64) -> Self {
        if score < 0.2 {
            Severity::Low
        } else if score < 0.5 {
            Severity::Medium
        } else {
            Severity::High
        }
    }
}
