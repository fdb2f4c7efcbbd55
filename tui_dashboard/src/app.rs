use std::sync::mpsc::Receiver;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use monitor_core::{
    visible_documents, DashboardState, DatasetSource, MonitorData, SortColumn, ViewRefresh,
    RANGE_CHOICES,
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::chart::ScoreChart;
use crate::ui::{draw_ui, ModalView, UiState};

enum Flow {
    Continue,
    Exit,
}

pub struct DashboardApp {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    data: MonitorData,
    source: DatasetSource,
    state: DashboardState,
    chart: ScoreChart,
    ui_state: UiState,
    log_receiver: Receiver<String>,
}

impl DashboardApp {
    pub fn new(
        data: MonitorData,
        source: DatasetSource,
        state: DashboardState,
        log_receiver: Receiver<String>,
    ) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        let mut app = Self {
            terminal,
            data,
            source,
            state,
            chart: ScoreChart::new(),
            ui_state: UiState::default(),
            log_receiver,
        };
        app.refresh(ViewRefresh::All);
        Ok(app)
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            while let Ok(line) = self.log_receiver.try_recv() {
                self.ui_state.push_log(line);
            }

            self.draw()?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Flow::Exit = self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        self.restore_terminal()
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            data,
            source,
            state,
            chart,
            ui_state,
            ..
        } = self;
        terminal.draw(|frame| draw_ui(frame, ui_state, data, source, state, chart))?;
        Ok(())
    }

    /// Applies a state change's refresh demand. Only [`ViewRefresh::All`]
    /// rebuilds the chart; month pins and sorts leave it untouched.
    fn refresh(&mut self, refresh: ViewRefresh) {
        match refresh {
            ViewRefresh::All => {
                if let Some(mp) = self.data.mp(self.state.mp_id()) {
                    self.chart.render(mp, self.state.range());
                }
                let selection = if self.row_count() > 0 { Some(0) } else { None };
                self.ui_state.table.select(selection);
            }
            ViewRefresh::TableAndIndicator | ViewRefresh::Table => {
                self.clamp_table_selection();
            }
            ViewRefresh::None => {}
        }
    }

    fn row_count(&self) -> usize {
        match self.data.mp(self.state.mp_id()) {
            Some(mp) => visible_documents(
                mp,
                self.state.range(),
                self.state.selected_month(),
                self.state.sort(),
            )
            .len(),
            None => 0,
        }
    }

    fn clamp_table_selection(&mut self) {
        let len = self.row_count();
        if len == 0 {
            self.ui_state.table.select(None);
            return;
        }
        match self.ui_state.table.selected() {
            Some(selected) if selected < len => {}
            _ => self.ui_state.table.select(Some(0)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Exit;
        }

        if self.ui_state.modal.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_modal(),
                _ => {}
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Exit,
            KeyCode::Char('m') => self.cycle_mp(1),
            KeyCode::Char('M') => self.cycle_mp(-1),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                let refresh = self.state.set_range(RANGE_CHOICES[index]);
                self.refresh(refresh);
            }
            KeyCode::Left => self.chart.move_cursor(-1),
            KeyCode::Right => self.chart.move_cursor(1),
            KeyCode::Char(' ') => {
                if let Some(month) = self.chart.cursor_month() {
                    let refresh = self.state.toggle_month(month);
                    self.refresh(refresh);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_table_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_table_selection(-1),
            KeyCode::Enter => {
                if let Some(selected) = self.ui_state.table.selected() {
                    self.open_document_at(selected);
                }
            }
            KeyCode::Char('t') => {
                let refresh = self.state.toggle_sort(SortColumn::Label);
                self.refresh(refresh);
            }
            KeyCode::Char('s') => {
                let refresh = self.state.toggle_sort(SortColumn::Score);
                self.refresh(refresh);
            }
            KeyCode::Char('d') => {
                let refresh = self.state.toggle_sort(SortColumn::Date);
                self.refresh(refresh);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        if self.ui_state.modal.is_some() {
            // Clicks outside the overlay dismiss it; everything else is
            // inert while it is open.
            if !point_in_rect(column, row, self.ui_state.areas.modal) {
                self.close_modal();
            }
            return;
        }

        if let Some(month) = self.chart.hit_point(column, row) {
            let refresh = self.state.toggle_month(month);
            self.refresh(refresh);
            return;
        }

        if point_in_rect(column, row, self.ui_state.areas.mp_selector) {
            self.cycle_mp(1);
            return;
        }

        let tab = self
            .ui_state
            .areas
            .range_tabs
            .iter()
            .find(|(rect, _)| point_in_rect(column, row, *rect))
            .map(|(_, range)| *range);
        if let Some(range) = tab {
            let refresh = self.state.set_range(range);
            self.refresh(refresh);
            return;
        }

        let header = self
            .ui_state
            .areas
            .sort_headers
            .iter()
            .find(|(rect, _)| point_in_rect(column, row, *rect))
            .map(|(_, sort_column)| *sort_column);
        if let Some(sort_column) = header {
            let refresh = self.state.toggle_sort(sort_column);
            self.refresh(refresh);
            return;
        }

        let table_row = self
            .ui_state
            .areas
            .table_rows
            .iter()
            .find(|(rect, _)| point_in_rect(column, row, *rect))
            .map(|(_, view_index)| *view_index);
        if let Some(view_index) = table_row {
            self.open_document_at(view_index);
        }
    }

    fn cycle_mp(&mut self, step: isize) {
        let count = self.data.mps.len();
        if count == 0 {
            return;
        }
        let current = self.data.mp_index(self.state.mp_id()).unwrap_or(0);
        let next = (current as isize + step).rem_euclid(count as isize) as usize;
        let id = self.data.mps[next].id.clone();
        let refresh = self.state.select_mp(&id);
        self.refresh(refresh);
    }

    fn move_table_selection(&mut self, step: isize) {
        let len = self.row_count();
        if len == 0 {
            self.ui_state.table.select(None);
            return;
        }
        let current = self.ui_state.table.selected().unwrap_or(0);
        let next = (current as isize + step).clamp(0, len as isize - 1) as usize;
        self.ui_state.table.select(Some(next));
    }

    /// Opens the detail overlay for a row of the current table view.
    fn open_document_at(&mut self, view_index: usize) {
        let Some(mp) = self.data.mp(self.state.mp_id()) else {
            return;
        };
        let rows = visible_documents(
            mp,
            self.state.range(),
            self.state.selected_month(),
            self.state.sort(),
        );
        let Some(row) = rows.get(view_index) else {
            return;
        };
        let doc_index = row.doc_index;
        info!(
            target: "tui_dashboard::app",
            document = %row.document.label,
            "modal.opened"
        );
        self.ui_state.table.select(Some(view_index));
        self.ui_state.modal = Some(ModalView { doc_index });
    }

    fn close_modal(&mut self) {
        self.ui_state.modal = None;
        debug!(target: "tui_dashboard::app", "modal.closed");
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_in_rect_checks_bounds() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(point_in_rect(2, 3, rect));
        assert!(point_in_rect(5, 4, rect));
        assert!(!point_in_rect(6, 4, rect));
        assert!(!point_in_rect(5, 5, rect));
        assert!(!point_in_rect(1, 3, rect));
        assert!(!point_in_rect(0, 0, Rect::default()));
    }
}
