//! The score chart: monthly series with confidence band, rendered as a
//! braille line chart.
//!
//! The chart holds exactly one rendered instance at a time. Changing the
//! MP or the time range rebuilds it from scratch; pinning a month in the
//! table does not touch it. Clicks resolve to the nearest data point by
//! column, like an index-mode tooltip, so hitting the line itself is not
//! required.

use monitor_core::{Mp, MonthKey, ScoreRecord, TimeRange};
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

/// Most x axis labels shown before thinning kicks in.
const MAX_X_LABELS: usize = 12;

/// Horizontal step, in month units, between band fill columns.
const BAND_FILL_X_STEP: f64 = 0.25;

/// Vertical step, in score units, between band fill dots.
const BAND_FILL_Y_STEP: f64 = 0.02;

pub struct ScoreChart {
    rendered: Option<RenderedChart>,
    cursor: usize,
}

/// One live chart build: the visible slice of the series plus the point
/// buffers the datasets borrow at draw time.
struct RenderedChart {
    records: Vec<ScoreRecord>,
    main_points: Vec<(f64, f64)>,
    lower_points: Vec<(f64, f64)>,
    upper_points: Vec<(f64, f64)>,
    band_fill: Vec<(f64, f64)>,
    x_labels: Vec<String>,
    x_bounds: [f64; 2],
    /// Graph region of the last draw, in terminal cells. Clicks outside
    /// it miss the chart.
    plot_area: Rect,
}

impl ScoreChart {
    pub fn new() -> Self {
        Self {
            rendered: None,
            cursor: 0,
        }
    }

    /// Rebuilds the chart for an MP and range, dropping the previous
    /// instance. The cursor moves to the most recent visible month.
    pub fn render(&mut self, mp: &Mp, range: TimeRange) {
        let records: Vec<ScoreRecord> = range.slice(&mp.scores).to_vec();
        tracing::debug!(
            target: "tui_dashboard::chart",
            mp = %mp.id,
            points = records.len(),
            "chart.rendered"
        );
        self.cursor = records.len().saturating_sub(1);
        self.rendered = Some(RenderedChart::build(records));
    }

    /// Month under the cursor, if a chart is live.
    pub fn cursor_month(&self) -> Option<MonthKey> {
        let rendered = self.rendered.as_ref()?;
        rendered.records.get(self.cursor).map(|record| record.month)
    }

    /// Readout for the cursor point, mirroring the hover tooltip: month,
    /// score, confidence interval, click hint.
    pub fn cursor_readout(&self) -> Option<String> {
        let rendered = self.rendered.as_ref()?;
        let record = rendered.records.get(self.cursor)?;
        Some(format!(
            "{}  ·  Score: {:.2}  [{:.2} – {:.2}]  ·  Klicken zum Filtern",
            record.month.short_label(),
            record.score,
            record.lower,
            record.upper
        ))
    }

    /// Moves the cursor along the visible series, clamped to its ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(rendered) = self.rendered.as_ref() else {
            return;
        };
        if rendered.records.is_empty() {
            return;
        }
        let last = rendered.records.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Resolves a click to the nearest data point by column and moves the
    /// cursor there. Returns `None` for clicks outside the graph region.
    pub fn hit_point(&mut self, column: u16, row: u16) -> Option<MonthKey> {
        let rendered = self.rendered.as_ref()?;
        let area = rendered.plot_area;
        if area.width == 0 || rendered.records.is_empty() {
            return None;
        }
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let span = rendered.x_bounds[1] - rendered.x_bounds[0];
        // The first and last points sit on the region's edge columns.
        let divisor = f64::from(area.width.saturating_sub(1).max(1));
        let fraction = f64::from(column - area.x) / divisor;
        let index = (fraction * span).round() as usize;
        let index = index.min(rendered.records.len() - 1);
        self.cursor = index;
        Some(rendered.records[index].month)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Illiberaler Diskurs-Score");
        let Some(rendered) = self.rendered.as_mut() else {
            frame.render_widget(block, area);
            return;
        };
        rendered.plot_area = graph_region(area);

        let cursor_point: Vec<(f64, f64)> = rendered
            .main_points
            .get(self.cursor)
            .map(|point| vec![*point])
            .unwrap_or_default();
        let mut datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::DarkGray))
                .data(&rendered.band_fill),
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&rendered.lower_points),
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&rendered.upper_points),
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .data(&rendered.main_points),
        ];
        if !cursor_point.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::Yellow))
                    .data(&cursor_point),
            );
        }

        let x_labels: Vec<Span> = rendered
            .x_labels
            .iter()
            .map(|label| Span::raw(label.as_str()))
            .collect();
        let y_labels: Vec<Span> = ["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]
            .iter()
            .map(|label| Span::raw(*label))
            .collect();

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds(rendered.x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, 1.0])
                    .labels(y_labels),
            );
        frame.render_widget(chart, area);
    }
}

impl RenderedChart {
    fn build(records: Vec<ScoreRecord>) -> Self {
        let last = records.len().saturating_sub(1).max(1);
        let x_bounds = [0.0, last as f64];
        let main_points: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.score))
            .collect();
        let lower_points: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.lower))
            .collect();
        let upper_points: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.upper))
            .collect();
        Self {
            band_fill: band_fill_points(&records),
            x_labels: thinned_labels(&records),
            x_bounds,
            main_points,
            lower_points,
            upper_points,
            records,
            plot_area: Rect::default(),
        }
    }
}

/// Estimates the graph region inside the chart widget: borders, then the
/// y label gutter on the left and the x axis rows at the bottom.
fn graph_region(area: Rect) -> Rect {
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });
    let y_gutter = 4;
    let x_gutter = 2;
    Rect {
        x: inner.x + y_gutter,
        y: inner.y,
        width: inner.width.saturating_sub(y_gutter),
        height: inner.height.saturating_sub(x_gutter),
    }
}

/// Dot columns between the lower and upper bounds, interpolated between
/// data points so the band reads as a filled region.
fn band_fill_points(records: &[ScoreRecord]) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if records.is_empty() {
        return points;
    }
    let mut push_column = |x: f64, lower: f64, upper: f64| {
        let mut y = lower;
        while y <= upper {
            points.push((x, y));
            y += BAND_FILL_Y_STEP;
        }
    };
    for (i, pair) in records.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        let mut t = 0.0;
        while t < 1.0 {
            push_column(
                i as f64 + t,
                a.lower + (b.lower - a.lower) * t,
                a.upper + (b.upper - a.upper) * t,
            );
            t += BAND_FILL_X_STEP;
        }
    }
    let last = records.len() - 1;
    push_column(last as f64, records[last].lower, records[last].upper);
    points
}

/// Picks at most [`MAX_X_LABELS`] month labels, spaced to match where the
/// axis will place them, so the first and last visible months always read
/// correctly.
fn thinned_labels(records: &[ScoreRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }
    let count = records.len().min(MAX_X_LABELS);
    if count == 1 {
        return vec![records[0].month.short_label()];
    }
    (0..count)
        .map(|k| {
            let index =
                ((k as f64) * (records.len() - 1) as f64 / (count - 1) as f64).round() as usize;
            records[index].month.short_label()
        })
        .collect()
}
