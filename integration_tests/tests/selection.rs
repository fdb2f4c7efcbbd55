mod common;

use monitor_core::{
    body_for_index, visible_documents, DashboardState, MonthKey, Severity, SortSpec, TimeRange,
    ViewRefresh, PLACEHOLDER_TEXTS,
};

/// Pinning a chart month narrows the table; pinning the same month again
/// restores the unfiltered view.
#[test]
fn repeated_point_selection_round_trips_the_table() {
    let data = common::load_fixture();
    let mp = data.mp("mp-alpha").expect("fixture MP");
    let mut state = DashboardState::new("mp-alpha", TimeRange::All);

    let before: Vec<String> =
        visible_documents(mp, state.range(), state.selected_month(), state.sort())
            .iter()
            .map(|r| r.document.label.clone())
            .collect();

    let february: MonthKey = "2024-02".parse().unwrap();
    assert_eq!(state.toggle_month(february), ViewRefresh::TableAndIndicator);
    let pinned = visible_documents(mp, state.range(), state.selected_month(), state.sort());
    assert_eq!(pinned.len(), 2);

    assert_eq!(state.toggle_month(february), ViewRefresh::TableAndIndicator);
    let after: Vec<String> =
        visible_documents(mp, state.range(), state.selected_month(), state.sort())
            .iter()
            .map(|r| r.document.label.clone())
            .collect();
    assert_eq!(before, after);
}

/// Changing the MP or the range drops the pinned month and demands a full
/// rebuild; re-selecting the current MP does nothing.
#[test]
fn mp_and_range_changes_reset_the_pinned_month() {
    let data = common::load_fixture();
    let mut state = DashboardState::new("mp-alpha", TimeRange::All);
    let month: MonthKey = "2024-05".parse().unwrap();

    state.toggle_month(month);
    assert_eq!(state.select_mp("mp-omega"), ViewRefresh::All);
    assert_eq!(state.selected_month(), None);
    assert!(data.mp(state.mp_id()).is_some());

    state.toggle_month(month);
    assert_eq!(state.set_range(TimeRange::LastMonths(6)), ViewRefresh::All);
    assert_eq!(state.selected_month(), None);

    state.toggle_month(month);
    assert_eq!(state.select_mp("mp-omega"), ViewRefresh::None);
    assert_eq!(state.selected_month(), Some(month));
}

/// The indicator narrates the pinned month in German and offers the
/// reset hint; without a pin it invites point clicks.
#[test]
fn indicator_strings_follow_the_selection() {
    let mut state = DashboardState::new("mp-alpha", TimeRange::All);
    assert_eq!(
        state.indicator_text(),
        "Alle Dokumente  ·  Datenpunkt anklicken zum Filtern"
    );

    let month: MonthKey = "2024-05".parse().unwrap();
    state.toggle_month(month);
    assert_eq!(
        state.indicator_text(),
        "Dokumente für: Mai 2024  ·  Erneut klicken zum Aufheben"
    );
}

/// Severity buckets split exactly at 0.2 and 0.5; the fixture carries one
/// document on each boundary.
#[test]
fn fixture_documents_hit_the_severity_boundaries() {
    let data = common::load_fixture();
    let mp = data.mp("mp-alpha").expect("fixture MP");
    let rows = visible_documents(mp, TimeRange::All, None, SortSpec::default());

    let severity_of = |label: &str| {
        rows.iter()
            .find(|r| r.document.label == label)
            .map(|r| r.severity)
            .expect("label present")
    };
    assert_eq!(severity_of("Zebra-Antrag"), Severity::Low);
    assert_eq!(severity_of("alpha-Rede"), Severity::Medium);
    assert_eq!(severity_of("Beta-Bericht"), Severity::High);
    assert_eq!(severity_of("Gamma-Anfrage"), Severity::High);
    assert_eq!(severity_of("Epsilon-Antrag"), Severity::Low);
}

/// Detail bodies are assigned by dataset position modulo the pool size,
/// so the same document always shows the same text.
#[test]
fn detail_bodies_cycle_with_dataset_position() {
    let data = common::load_fixture();
    let mp = data.mp("mp-alpha").expect("fixture MP");
    assert_eq!(mp.documents.len(), 7);

    let first = body_for_index(0);
    let wrapped = body_for_index(PLACEHOLDER_TEXTS.len());
    assert!(std::ptr::eq(first, wrapped));

    for doc_index in 0..mp.documents.len() {
        let body = body_for_index(doc_index);
        assert!(!body.paragraphs.is_empty());
    }
}
