//! Selection state of the dashboard and the operations that mutate it.
//!
//! Every mutation reports which parts of the view have to be redrawn, so
//! the shell can leave the chart alone when only the table changed. Point
//! selection in particular must never rebuild the chart.

use crate::documents::{SortColumn, SortSpec};
use crate::month::MonthKey;
use crate::range::TimeRange;

/// Which view surfaces a state change invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRefresh {
    /// Chart, table and indicator all need a rebuild.
    All,
    /// Table and indicator only; the chart instance stays as it is.
    TableAndIndicator,
    /// Table only.
    Table,
    /// Nothing changed.
    None,
}

/// The dashboard's selection state: which MP, which time range, which
/// chart month is pinned, and how the table is sorted.
#[derive(Debug, Clone)]
pub struct DashboardState {
    mp_id: String,
    range: TimeRange,
    selected_month: Option<MonthKey>,
    sort: SortSpec,
}

impl DashboardState {
    pub fn new(mp_id: impl Into<String>, range: TimeRange) -> Self {
        Self {
            mp_id: mp_id.into(),
            range,
            selected_month: None,
            sort: SortSpec::default(),
        }
    }

    pub fn mp_id(&self) -> &str {
        &self.mp_id
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn selected_month(&self) -> Option<MonthKey> {
        self.selected_month
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Switches to another MP. Clears the pinned month, since it referred
    /// to the previous MP's series.
    pub fn select_mp(&mut self, mp_id: &str) -> ViewRefresh {
        if self.mp_id == mp_id {
            return ViewRefresh::None;
        }
        self.mp_id = mp_id.to_string();
        self.selected_month = None;
        tracing::debug!(target: "monitor_core::state", mp = %self.mp_id, "state.mp_selected");
        ViewRefresh::All
    }

    /// Applies a time range. Clears the pinned month even when the range
    /// is unchanged; re-picking a range is an explicit reset gesture.
    pub fn set_range(&mut self, range: TimeRange) -> ViewRefresh {
        self.range = range;
        self.selected_month = None;
        tracing::debug!(target: "monitor_core::state", range = %self.range, "state.range_set");
        ViewRefresh::All
    }

    /// Pins the table to one chart month, or unpins it when that month is
    /// already selected. The chart itself is not invalidated.
    pub fn toggle_month(&mut self, month: MonthKey) -> ViewRefresh {
        if self.selected_month == Some(month) {
            self.selected_month = None;
            tracing::debug!(target: "monitor_core::state", %month, "state.month_cleared");
        } else {
            self.selected_month = Some(month);
            tracing::debug!(target: "monitor_core::state", %month, "state.month_pinned");
        }
        ViewRefresh::TableAndIndicator
    }

    /// Re-sorts the table by the given column (see [`SortSpec::toggle`]).
    pub fn toggle_sort(&mut self, column: SortColumn) -> ViewRefresh {
        self.sort.toggle(column);
        ViewRefresh::Table
    }

    /// The German status line above the table.
    pub fn indicator_text(&self) -> String {
        match self.selected_month {
            Some(month) => format!(
                "Dokumente für: {} {}  ·  Erneut klicken zum Aufheben",
                month.long_name(),
                month.year()
            ),
            None => "Alle Dokumente  ·  Datenpunkt anklicken zum Filtern".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::SortDirection;

    fn month(raw: &str) -> MonthKey {
        raw.parse().unwrap()
    }

    #[test]
    fn initial_state() {
        let state = DashboardState::new("mdb-a", TimeRange::All);
        assert_eq!(state.mp_id(), "mdb-a");
        assert_eq!(state.range(), TimeRange::All);
        assert_eq!(state.selected_month(), None);
        assert_eq!(state.sort().column, SortColumn::Date);
        assert_eq!(state.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn selecting_another_mp_clears_the_month() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        state.toggle_month(month("2024-03"));
        assert_eq!(state.select_mp("mdb-b"), ViewRefresh::All);
        assert_eq!(state.mp_id(), "mdb-b");
        assert_eq!(state.selected_month(), None);
    }

    #[test]
    fn reselecting_the_same_mp_is_a_no_op() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        state.toggle_month(month("2024-03"));
        assert_eq!(state.select_mp("mdb-a"), ViewRefresh::None);
        // The no-op leaves the pinned month alone.
        assert_eq!(state.selected_month(), Some(month("2024-03")));
    }

    #[test]
    fn range_changes_clear_the_month() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        state.toggle_month(month("2024-03"));
        assert_eq!(state.set_range(TimeRange::LastMonths(6)), ViewRefresh::All);
        assert_eq!(state.range(), TimeRange::LastMonths(6));
        assert_eq!(state.selected_month(), None);
        // Re-picking the active range still resets the month.
        state.toggle_month(month("2024-04"));
        state.set_range(TimeRange::LastMonths(6));
        assert_eq!(state.selected_month(), None);
    }

    #[test]
    fn month_toggle_pins_and_unpins() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        assert_eq!(state.toggle_month(month("2024-03")), ViewRefresh::TableAndIndicator);
        assert_eq!(state.selected_month(), Some(month("2024-03")));
        assert_eq!(state.toggle_month(month("2024-04")), ViewRefresh::TableAndIndicator);
        assert_eq!(state.selected_month(), Some(month("2024-04")));
        assert_eq!(state.toggle_month(month("2024-04")), ViewRefresh::TableAndIndicator);
        assert_eq!(state.selected_month(), None);
    }

    #[test]
    fn sort_toggle_never_touches_the_chart() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        assert_eq!(state.toggle_sort(SortColumn::Score), ViewRefresh::Table);
        assert_eq!(state.sort().column, SortColumn::Score);
        assert_eq!(state.sort().direction, SortDirection::Descending);
        assert_eq!(state.toggle_sort(SortColumn::Score), ViewRefresh::Table);
        assert_eq!(state.sort().direction, SortDirection::Ascending);
    }

    #[test]
    fn indicator_text_names_the_pinned_month() {
        let mut state = DashboardState::new("mdb-a", TimeRange::All);
        assert_eq!(
            state.indicator_text(),
            "Alle Dokumente  ·  Datenpunkt anklicken zum Filtern"
        );
        state.toggle_month(month("2024-03"));
        assert_eq!(
            state.indicator_text(),
            "Dokumente für: März 2024  ·  Erneut klicken zum Aufheben"
        );
        state.toggle_month(month("2024-03"));
        assert_eq!(
            state.indicator_text(),
            "Alle Dokumente  ·  Datenpunkt anklicken zum Filtern"
        );
    }
}
