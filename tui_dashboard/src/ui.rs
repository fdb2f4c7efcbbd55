//! Rendering of the dashboard panes and the clickable regions they expose.
//!
//! Every draw pass rebuilds [`UiAreas`] from the rects that were actually
//! rendered, so mouse dispatch in the app always matches the layout on
//! screen, whatever the terminal size.

use std::collections::VecDeque;

use monitor_core::{
    body_for_index, format_date_german, visible_documents, DashboardState, DatasetSource,
    MonitorData, Severity, SortColumn, SortDirection, TimeRange, DISCLAIMER, RANGE_CHOICES,
};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use ratatui::Frame;

use crate::chart::ScoreChart;

/// Fixed widths of the score and date columns; the label column takes the
/// rest. Header click zones are derived from the same numbers.
const SCORE_COLUMN_WIDTH: u16 = 8;
const DATE_COLUMN_WIDTH: u16 = 12;
const COLUMN_SPACING: u16 = 1;

/// The document detail overlay, keyed by position in the MP's full
/// document list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalView {
    pub doc_index: usize,
}

/// Click targets registered during the last draw.
#[derive(Debug, Default, Clone)]
pub struct UiAreas {
    pub mp_selector: Rect,
    pub range_tabs: Vec<(Rect, TimeRange)>,
    pub sort_headers: Vec<(Rect, SortColumn)>,
    pub table_rows: Vec<(Rect, usize)>,
    pub modal: Rect,
}

pub struct UiState {
    pub logs: VecDeque<String>,
    pub max_logs: usize,
    pub table: TableState,
    pub modal: Option<ModalView>,
    pub areas: UiAreas,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            logs: VecDeque::new(),
            max_logs: 8,
            table: TableState::default(),
            modal: None,
            areas: UiAreas::default(),
        }
    }
}

impl UiState {
    pub fn push_log<S: Into<String>>(&mut self, line: S) {
        let mut text: String = line.into();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        if text.is_empty() {
            return;
        }
        self.logs.push_front(text);
        while self.logs.len() > self.max_logs {
            self.logs.pop_back();
        }
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    ui: &mut UiState,
    data: &MonitorData,
    source: &DatasetSource,
    state: &DashboardState,
    chart: &mut ScoreChart,
) {
    ui.areas = UiAreas::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(11),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], ui, data, source, state);
    chart.draw(frame, chunks[1]);
    draw_status(frame, chunks[2], state, chart);
    draw_table(frame, chunks[3], ui, data, state);
    draw_logs(frame, chunks[4], ui);
    draw_footer(frame, chunks[5]);
    draw_modal(frame, ui, data, state);
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    ui: &mut UiState,
    data: &MonitorData,
    source: &DatasetSource,
    state: &DashboardState,
) {
    let block = Block::default().borders(Borders::ALL).title("Demokratiemonitor");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });
    if inner.height < 2 {
        return;
    }

    let selector_area = Rect { height: 1, ..inner };
    let tabs_area = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };

    let selector_line = match data.mp(state.mp_id()) {
        Some(mp) => {
            let position = data.mp_index(state.mp_id()).unwrap_or(0) + 1;
            Line::from(vec![
                Span::raw("MdB: "),
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    mp.display_label(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("  ({position}/{})", data.mps.len())),
                Span::styled(
                    format!("  ·  Daten: {source}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        None => Line::from(Span::styled(
            format!("MdB {:?} nicht im Datensatz", state.mp_id()),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(selector_line), selector_area);
    ui.areas.mp_selector = selector_area;

    let labels: Vec<Line> = RANGE_CHOICES
        .iter()
        .map(|range| Line::from(range.tab_label()))
        .collect();
    let selected = RANGE_CHOICES
        .iter()
        .position(|range| *range == state.range())
        .unwrap_or(0);
    let tabs = Tabs::new(labels)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    // Mirror the Tabs widget layout: one space either side of each title,
    // one divider cell between tabs.
    let mut x = tabs_area.x;
    for range in RANGE_CHOICES {
        let width = range.tab_label().chars().count() as u16 + 2;
        if x + width > tabs_area.x + tabs_area.width {
            break;
        }
        ui.areas.range_tabs.push((
            Rect {
                x,
                y: tabs_area.y,
                width,
                height: 1,
            },
            range,
        ));
        x += width + 1;
    }
}

fn draw_status(frame: &mut Frame, area: Rect, state: &DashboardState, chart: &ScoreChart) {
    let block = Block::default().borders(Borders::ALL).title("Auswahl");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let indicator_style = if state.selected_month().is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut lines = vec![Line::from(Span::styled(state.indicator_text(), indicator_style))];
    if let Some(readout) = chart.cursor_readout() {
        lines.push(Line::from(Span::raw(readout)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    ui: &mut UiState,
    data: &MonitorData,
    state: &DashboardState,
) {
    let block = Block::default().borders(Borders::ALL).title("Dokumente");
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });
    let label_width = inner
        .width
        .saturating_sub(SCORE_COLUMN_WIDTH + DATE_COLUMN_WIDTH + 2 * COLUMN_SPACING);

    let header_cells: Vec<Cell> = [SortColumn::Label, SortColumn::Score, SortColumn::Date]
        .into_iter()
        .map(|column| {
            let mut text = column.header().to_string();
            if state.sort().column == column {
                text.push(' ');
                text.push(match state.sort().direction {
                    SortDirection::Ascending => '▲',
                    SortDirection::Descending => '▼',
                });
            }
            Cell::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    let header = Row::new(header_cells);

    let rows_view = match data.mp(state.mp_id()) {
        Some(mp) => visible_documents(mp, state.range(), state.selected_month(), state.sort()),
        None => Vec::new(),
    };

    let rows: Vec<Row> = if rows_view.is_empty() {
        vec![Row::new(vec![
            Cell::from(Span::styled(
                "Keine Dokumente für diese Auswahl",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Cell::from(""),
            Cell::from(""),
        ])]
    } else {
        rows_view
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(Span::raw(row.document.label.as_str())),
                    Cell::from(Span::styled(
                        format!("{:.2}", row.document.score),
                        Style::default().fg(severity_color(row.severity)),
                    )),
                    Cell::from(Span::raw(format_date_german(row.document.date))),
                ])
            })
            .collect()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(label_width),
            Constraint::Length(SCORE_COLUMN_WIDTH),
            Constraint::Length(DATE_COLUMN_WIDTH),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(COLUMN_SPACING)
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, &mut ui.table);

    // Header cells sit on the first inner row, data rows below them.
    let mut x = inner.x;
    for (column, width) in [
        (SortColumn::Label, label_width),
        (SortColumn::Score, SCORE_COLUMN_WIDTH),
        (SortColumn::Date, DATE_COLUMN_WIDTH),
    ] {
        ui.areas.sort_headers.push((
            Rect {
                x,
                y: inner.y,
                width,
                height: 1,
            },
            column,
        ));
        x += width + COLUMN_SPACING;
    }

    if !rows_view.is_empty() && inner.height > 1 {
        let visible = (inner.height - 1) as usize;
        let offset = ui.table.offset();
        for slot in 0..visible {
            let view_index = offset + slot;
            if view_index >= rows_view.len() {
                break;
            }
            ui.areas.table_rows.push((
                Rect {
                    x: inner.x,
                    y: inner.y + 1 + slot as u16,
                    width: inner.width,
                    height: 1,
                },
                view_index,
            ));
        }
    }
}

fn draw_logs(frame: &mut Frame, area: Rect, ui: &UiState) {
    let block = Block::default().borders(Borders::ALL).title("Logs");
    let lines: Vec<Line> = ui
        .logs
        .iter()
        .map(|entry| Line::from(Span::raw(entry)))
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let line = Line::from(vec![
        Span::styled("q", key),
        Span::raw(" beenden  "),
        Span::styled("m/M", key),
        Span::raw(" MdB  "),
        Span::styled("1-4", key),
        Span::raw(" Zeitraum  "),
        Span::styled("←/→", key),
        Span::raw(" Punkt  "),
        Span::styled("Leertaste", key),
        Span::raw(" Monatsfilter  "),
        Span::styled("↑/↓", key),
        Span::raw(" Zeile  "),
        Span::styled("Enter", key),
        Span::raw(" Details  "),
        Span::styled("t/s/d", key),
        Span::raw(" Sortierung"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_modal(frame: &mut Frame, ui: &mut UiState, data: &MonitorData, state: &DashboardState) {
    let Some(modal) = ui.modal else {
        return;
    };
    let Some(mp) = data.mp(state.mp_id()) else {
        return;
    };
    let Some(document) = mp.documents.get(modal.doc_index) else {
        return;
    };

    let area = centered_rect(72, 80, frame.size());
    ui.areas.modal = area;
    frame.render_widget(Clear, area);

    let severity = Severity::for_score(document.score);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Sprecher/in: ", Style::default().fg(Color::DarkGray)),
            Span::raw(mp.name.as_str()),
            Span::styled("   Datum: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_date_german(document.date)),
            Span::styled("   Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", document.score),
                Style::default()
                    .fg(severity_color(severity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];

    let body = body_for_index(modal.doc_index);
    for (i, paragraph) in body.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let spans: Vec<Span> = paragraph
            .iter()
            .map(|segment| {
                if segment.highlight {
                    Span::styled(
                        segment.text,
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(segment.text)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        DISCLAIMER,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        "Esc schließen",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(document.label.clone());
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

/// Centered overlay rect taking the given percentages of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
