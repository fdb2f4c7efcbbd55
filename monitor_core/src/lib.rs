//! Core model and state for the Demokratiemonitor demo dashboard.
//!
//! This crate is UI-free. It owns the pre-baked dataset (loading,
//! validation, the builtin fixture), the selection state machine of the
//! dashboard, and the document table pipeline. The terminal front end in
//! `tui_dashboard` renders on top of it.
//!
//! All data is read-only after load and every operation is synchronous;
//! there is no runtime data acquisition.

mod dataset;
mod documents;
mod model;
mod month;
mod placeholder;
mod range;
mod state;

pub use dataset::{
    load_dataset, DatasetError, DatasetSource, BUILTIN_DATASET, DATASET_PATH_ENV_VAR,
};
pub use documents::{visible_documents, DocumentRow, SortColumn, SortDirection, SortSpec};
pub use model::{Document, MonitorData, Mp, ScoreRecord, Severity};
pub use month::{
    format_date_german, MonthKey, MonthKeyError, MONTH_NAMES_LONG, MONTH_NAMES_SHORT,
};
pub use placeholder::{body_for_index, PlaceholderText, Segment, DISCLAIMER, PLACEHOLDER_TEXTS};
pub use range::{ParseRangeError, TimeRange, RANGE_CHOICES};
pub use state::{DashboardState, ViewRefresh};
