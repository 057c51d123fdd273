//! # Root List Component
//!
//! The two-section list on the root screen. Arrow keys move the highlight
//! (headers are skipped), Enter activates it, and a left click activates
//! whatever row is under the pointer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RootListState` lives in `TuiState`
//! - `RootList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::listing::{ListRow, first_selectable, step_selection};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the root list.
pub struct RootListState {
    pub rows: Vec<ListRow>,
    pub list_state: ListState,
    /// Area the list was last drawn into, for click hit testing.
    last_area: Option<Rect>,
}

impl RootListState {
    pub fn new(rows: Vec<ListRow>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(first_selectable(&rows));
        Self {
            rows,
            list_state,
            last_area: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_row(&self) -> Option<&ListRow> {
        self.selected().and_then(|i| self.rows.get(i))
    }

    fn step(&mut self, forward: bool) {
        if let Some(current) = self.selected() {
            let next = step_selection(&self.rows, current, forward);
            self.list_state.select(Some(next));
        }
    }

    /// Row index under the screen coordinate, accounting for the border
    /// and the list's scroll offset.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area?;
        let inner = Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .inner(area);

        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }

        let index = self.list_state.offset() + (row - inner.y) as usize;
        (index < self.rows.len()).then_some(index)
    }
}

/// Events emitted by the root list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Activate(ListRow),
}

impl EventHandler for RootListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.step(false);
                None
            }
            TuiEvent::CursorDown => {
                self.step(true);
                None
            }
            TuiEvent::Submit => self.selected_row().cloned().map(ListEvent::Activate),
            TuiEvent::MouseClick(column, row) => {
                let index = self.row_at(*column, *row)?;
                let target = self.rows[index].clone();
                if !target.is_selectable() {
                    return None;
                }
                self.list_state.select(Some(index));
                Some(ListEvent::Activate(target))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the root list.
pub struct RootList<'a> {
    state: &'a mut RootListState,
}

impl<'a> RootList<'a> {
    pub fn new(state: &'a mut RootListState) -> Self {
        Self { state }
    }
}

impl Component for RootList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = Some(area);

        let items: Vec<ListItem> = self.state.rows.iter().map(row_item).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn row_item(row: &ListRow) -> ListItem<'static> {
    match row {
        ListRow::Header(title) => ListItem::new(Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))),
        ListRow::Link(link) => ListItem::new(Line::from(vec![
            Span::styled(link.label, Style::default().fg(Color::Cyan)),
            Span::styled(" ›", Style::default().fg(Color::DarkGray)),
        ])),
        ListRow::Record(record) => ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::raw(record.title()),
            Span::styled(" ›", Style::default().fg(Color::DarkGray)),
        ])),
    }
}
