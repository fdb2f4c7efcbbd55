//! The document table pipeline: range filter, month filter, column sort.

use std::cmp::Ordering;

use crate::model::{Document, Mp, Severity};
use crate::month::MonthKey;
use crate::range::TimeRange;

/// Sortable columns of the document table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Label,
    Score,
    Date,
}

impl SortColumn {
    /// Direction a column starts in when it becomes the sort key.
    /// Score starts high-to-low, the text and date columns low-to-high.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortColumn::Score => SortDirection::Descending,
            SortColumn::Label | SortColumn::Date => SortDirection::Ascending,
        }
    }

    /// Table header text for the column.
    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Label => "Dokument",
            SortColumn::Score => "Score",
            SortColumn::Date => "Datum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort key and direction of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Re-selecting the active column flips its direction; selecting a
    /// different column switches to it in its default direction.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            *self = SortSpec {
                column,
                direction: column.default_direction(),
            };
        }
    }
}

impl Default for SortSpec {
    /// The table opens sorted by date, newest first.
    fn default() -> Self {
        SortSpec {
            column: SortColumn::Date,
            direction: SortDirection::Descending,
        }
    }
}

/// One row of the rendered document table. `doc_index` is the position in
/// the MP's full document list, which also picks the placeholder body shown
/// in the detail view.
#[derive(Debug, Clone)]
pub struct DocumentRow<'a> {
    pub doc_index: usize,
    pub document: &'a Document,
    pub severity: Severity,
}

/// Applies the table pipeline for one MP: drop documents outside the range
/// window, then outside the selected month, then sort. The sort is stable,
/// so equal keys keep their dataset order.
pub fn visible_documents<'a>(
    mp: &'a Mp,
    range: TimeRange,
    selected_month: Option<MonthKey>,
    sort: SortSpec,
) -> Vec<DocumentRow<'a>> {
    let window = range.window_months(&mp.scores);
    let mut rows: Vec<DocumentRow<'a>> = mp
        .documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| match &window {
            Some(months) => months.contains(&doc.month),
            None => true,
        })
        .filter(|(_, doc)| match selected_month {
            Some(month) => doc.month == month,
            None => true,
        })
        .map(|(doc_index, document)| DocumentRow {
            doc_index,
            document,
            severity: Severity::for_score(document.score),
        })
        .collect();
    rows.sort_by(|a, b| compare_documents(a.document, b.document, sort));
    rows
}

fn compare_documents(a: &Document, b: &Document, sort: SortSpec) -> Ordering {
    let ordering = match sort.column {
        SortColumn::Date => a.date.cmp(&b.date),
        SortColumn::Score => a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
        SortColumn::Label => a
            .label
            .to_lowercase()
            .cmp(&b.label.to_lowercase()),
    };
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc(label: &str, month: &str, day: u32, score: f64) -> Document {
        let month: MonthKey = month.parse().unwrap();
        Document {
            label: label.to_string(),
            month,
            date: NaiveDate::from_ymd_opt(month.year(), month.month(), day).unwrap(),
            score,
        }
    }

    fn mp() -> Mp {
        let months = ["2024-01", "2024-02", "2024-03", "2024-04"];
        Mp {
            id: "mdb-test".to_string(),
            name: "Erika Mustermann".to_string(),
            party: "SPD".to_string(),
            scores: months
                .iter()
                .map(|m| crate::model::ScoreRecord {
                    month: m.parse().unwrap(),
                    score: 0.3,
                    lower: 0.2,
                    upper: 0.4,
                })
                .collect(),
            documents: vec![
                doc("Zebra-Antrag", "2024-01", 10, 0.55),
                doc("alpha-Rede", "2024-02", 5, 0.15),
                doc("Beta-Bericht", "2024-02", 5, 0.35),
                doc("Gamma-Anfrage", "2024-04", 20, 0.75),
            ],
        }
    }

    fn labels<'a>(rows: &[DocumentRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.document.label.as_str()).collect()
    }

    #[test]
    fn default_sort_is_date_descending() {
        let mp = mp();
        let rows = visible_documents(&mp, TimeRange::All, None, SortSpec::default());
        assert_eq!(
            labels(&rows),
            ["Gamma-Anfrage", "alpha-Rede", "Beta-Bericht", "Zebra-Antrag"]
        );
    }

    #[test]
    fn range_window_drops_older_documents() {
        let mp = mp();
        let rows = visible_documents(&mp, TimeRange::LastMonths(2), None, SortSpec::default());
        assert_eq!(labels(&rows), ["Gamma-Anfrage"]);
    }

    #[test]
    fn month_filter_composes_with_range() {
        let mp = mp();
        let month: MonthKey = "2024-02".parse().unwrap();
        let rows = visible_documents(&mp, TimeRange::All, Some(month), SortSpec::default());
        assert_eq!(labels(&rows), ["alpha-Rede", "Beta-Bericht"]);
        // A selected month outside the range window yields nothing.
        let rows =
            visible_documents(&mp, TimeRange::LastMonths(2), Some(month), SortSpec::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn label_sort_ignores_case() {
        let mp = mp();
        let sort = SortSpec {
            column: SortColumn::Label,
            direction: SortDirection::Ascending,
        };
        let rows = visible_documents(&mp, TimeRange::All, None, sort);
        assert_eq!(
            labels(&rows),
            ["alpha-Rede", "Beta-Bericht", "Gamma-Anfrage", "Zebra-Antrag"]
        );
    }

    #[test]
    fn score_sort_orders_numerically() {
        let mp = mp();
        let sort = SortSpec {
            column: SortColumn::Score,
            direction: SortDirection::Descending,
        };
        let rows = visible_documents(&mp, TimeRange::All, None, sort);
        assert_eq!(
            labels(&rows),
            ["Gamma-Anfrage", "Zebra-Antrag", "Beta-Bericht", "alpha-Rede"]
        );
    }

    #[test]
    fn equal_dates_keep_dataset_order() {
        let mp = mp();
        let sort = SortSpec {
            column: SortColumn::Date,
            direction: SortDirection::Ascending,
        };
        let rows = visible_documents(&mp, TimeRange::All, None, sort);
        // alpha-Rede and Beta-Bericht share a date; dataset order survives.
        assert_eq!(
            labels(&rows),
            ["Zebra-Antrag", "alpha-Rede", "Beta-Bericht", "Gamma-Anfrage"]
        );
    }

    #[test]
    fn toggle_flips_only_the_active_column() {
        let mut sort = SortSpec::default();
        sort.toggle(SortColumn::Date);
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.toggle(SortColumn::Score);
        assert_eq!(sort.column, SortColumn::Score);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(SortColumn::Label);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn doc_index_tracks_dataset_position() {
        let mp = mp();
        let sort = SortSpec {
            column: SortColumn::Label,
            direction: SortDirection::Ascending,
        };
        let rows = visible_documents(&mp, TimeRange::All, None, sort);
        let indices: Vec<usize> = rows.iter().map(|r| r.doc_index).collect();
        assert_eq!(indices, [1, 2, 3, 0]);
    }
}
