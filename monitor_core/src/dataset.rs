//! Loading and validating the pre-baked monitor dataset.
//!
//! The dashboard ships with a builtin dataset compiled into the binary. A
//! JSON file can override it, either via the `--data` flag or the
//! `MONITOR_DATA_PATH` environment variable. Override failures fall back to
//! the builtin dataset with a warning; the dashboard itself has no error
//! surface.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::MonitorData;

/// The dataset compiled into the binary.
pub const BUILTIN_DATASET: &str = include_str!("data/monitor_data.json");

/// Environment variable pointing at an override dataset file.
pub const DATASET_PATH_ENV_VAR: &str = "MONITOR_DATA_PATH";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse monitor dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read monitor dataset from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid monitor dataset: {0}")]
    Invalid(String),
}

/// Where the active dataset came from, shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Builtin => write!(f, "eingebaut"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl MonitorData {
    /// Parses the builtin dataset. The fixture is part of the crate, so a
    /// failure here is a build defect, not a runtime condition.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_DATASET).expect("builtin monitor dataset should parse")
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let data: MonitorData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Structural checks beyond what deserialization enforces. Document
    /// months without a score record are tolerated with a warning; such
    /// documents never match a ranged window.
    fn validate(&self) -> Result<(), DatasetError> {
        if self.mps.is_empty() {
            return Err(DatasetError::Invalid("dataset contains no MPs".to_string()));
        }
        for (i, mp) in self.mps.iter().enumerate() {
            if self.mps[..i].iter().any(|other| other.id == mp.id) {
                return Err(DatasetError::Invalid(format!("duplicate MP id {:?}", mp.id)));
            }
            if mp.scores.is_empty() {
                return Err(DatasetError::Invalid(format!(
                    "MP {:?} has no score records",
                    mp.id
                )));
            }
            for pair in mp.scores.windows(2) {
                if pair[0].month >= pair[1].month {
                    return Err(DatasetError::Invalid(format!(
                        "MP {:?}: score months out of order ({} then {})",
                        mp.id, pair[0].month, pair[1].month
                    )));
                }
            }
            for record in &mp.scores {
                let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
                if !in_unit(record.score) || !in_unit(record.lower) || !in_unit(record.upper) {
                    return Err(DatasetError::Invalid(format!(
                        "MP {:?}: score values for {} outside 0..=1",
                        mp.id, record.month
                    )));
                }
                if !(record.lower <= record.score && record.score <= record.upper) {
                    return Err(DatasetError::Invalid(format!(
                        "MP {:?}: confidence band for {} does not bracket the score",
                        mp.id, record.month
                    )));
                }
            }
            for doc in &mp.documents {
                if !doc.score.is_finite() || !(0.0..=1.0).contains(&doc.score) {
                    return Err(DatasetError::Invalid(format!(
                        "MP {:?}: document {:?} score outside 0..=1",
                        mp.id, doc.label
                    )));
                }
                if !mp.scores.iter().any(|record| record.month == doc.month) {
                    tracing::warn!(
                        target: "monitor_core::dataset",
                        mp = %mp.id,
                        document = %doc.label,
                        month = %doc.month,
                        "dataset.dangling_document_month"
                    );
                }
            }
        }
        Ok(())
    }
}

/// Loads the dataset, preferring an explicit path, then the environment
/// override, then the builtin fixture. Any override failure is logged and
/// the builtin dataset is used instead.
pub fn load_dataset(explicit_path: Option<&Path>) -> (MonitorData, DatasetSource) {
    let env_path = std::env::var_os(DATASET_PATH_ENV_VAR).map(PathBuf::from);
    let candidate = explicit_path.map(Path::to_path_buf).or(env_path);

    if let Some(path) = candidate {
        match MonitorData::from_file(&path) {
            Ok(data) => {
                tracing::info!(
                    target: "monitor_core::dataset",
                    path = %path.display(),
                    mps = data.mps.len(),
                    "dataset.loaded_file"
                );
                return (data, DatasetSource::File(path));
            }
            Err(err) => {
                tracing::warn!(
                    target: "monitor_core::dataset",
                    path = %path.display(),
                    %err,
                    "dataset.fallback_builtin"
                );
            }
        }
    }

    let data = MonitorData::builtin();
    tracing::info!(
        target: "monitor_core::dataset",
        mps = data.mps.len(),
        "dataset.loaded_builtin"
    );
    (data, DatasetSource::Builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_parses_and_validates() {
        let data = MonitorData::builtin();
        assert_eq!(data.mps.len(), 5);
        for mp in &data.mps {
            assert_eq!(mp.scores.len(), 36);
            assert!(!mp.documents.is_empty());
        }
    }

    #[test]
    fn parse_errors_are_reported_as_parse() {
        let err = MonitorData::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = MonitorData::from_file(Path::new("/nonexistent/monitor.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn empty_dataset_is_invalid() {
        let err = MonitorData::from_json_str(r#"{"mps":[]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn duplicate_mp_ids_are_invalid() {
        let json = r#"{"mps":[
            {"id":"a","name":"A","party":"X","scores":[{"month":"2024-01","score":0.3,"lower":0.2,"upper":0.4}],"documents":[]},
            {"id":"a","name":"B","party":"Y","scores":[{"month":"2024-01","score":0.3,"lower":0.2,"upper":0.4}],"documents":[]}
        ]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn out_of_order_months_are_invalid() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[
            {"month":"2024-02","score":0.3,"lower":0.2,"upper":0.4},
            {"month":"2024-01","score":0.3,"lower":0.2,"upper":0.4}
        ],"documents":[]}]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn repeated_months_are_invalid() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[
            {"month":"2024-01","score":0.3,"lower":0.2,"upper":0.4},
            {"month":"2024-01","score":0.4,"lower":0.3,"upper":0.5}
        ],"documents":[]}]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn scores_outside_the_unit_interval_are_invalid() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[
            {"month":"2024-01","score":1.3,"lower":0.2,"upper":1.4}
        ],"documents":[]}]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn band_must_bracket_the_score() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[
            {"month":"2024-01","score":0.3,"lower":0.35,"upper":0.4}
        ],"documents":[]}]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn empty_score_series_is_invalid() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[],"documents":[]}]}"#;
        let err = MonitorData::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }

    #[test]
    fn dangling_document_months_are_tolerated() {
        let json = r#"{"mps":[{"id":"a","name":"A","party":"X","scores":[
            {"month":"2024-02","score":0.3,"lower":0.2,"upper":0.4}
        ],"documents":[
            {"label":"Rede","month":"2023-12","date":"2023-12-01","score":0.4}
        ]}]}"#;
        let data = MonitorData::from_json_str(json).unwrap();
        assert_eq!(data.mps[0].documents.len(), 1);
    }
}
