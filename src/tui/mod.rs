//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::listing::ListRow;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, RootListState};

pub use crate::tui::event::TuiEvent;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub root_list: RootListState,
    pub true_color: bool,
}

impl TuiState {
    pub fn new(app: &App, true_color: bool) -> Self {
        Self {
            root_list: RootListState::new(app.root_rows()),
            true_color,
        }
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
            info!("Mouse capture enabled");
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app, config.true_color);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new(config.mouse);
    if let Err(e) = &terminal_mode_guard {
        warn!("Could not enable mouse capture: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    info!("Exiting at depth {}", app.depth());
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

/// Draw and dispatch until `update` asks to quit. Errors are returned
/// with the terminal still in raw mode; `run` restores it.
fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = event::poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(event::poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if handle_event(app, tui, event, frame_area) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Route one terminal event to the root list or straight to `update`.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    debug!("TUI event: {:?}", event);

    let action = match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::PopToRoot => Some(Action::PopToRoot),
        TuiEvent::PopTo(depth) => Some(Action::PopTo(depth)),
        TuiEvent::Resize => None,
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test_breadcrumb(column, row, frame_area, app) {
                Some(depth) => Some(Action::PopTo(depth)),
                None => root_list_action(app, tui, &event),
            }
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
            root_list_action(app, tui, &event)
        }
    };

    match action {
        Some(action) => update(app, action),
        None => Effect::None,
    }
}

/// The root list only receives events while it is on screen.
fn root_list_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if app.active_screen() != Screen::Root {
        return None;
    }
    match tui.root_list.handle_event(event)? {
        ListEvent::Activate(ListRow::Record(record)) => Some(Action::Select(record)),
        ListEvent::Activate(ListRow::Link(link)) => Some(Action::OpenLink(link)),
        ListEvent::Activate(ListRow::Header(_)) => None,
    }
}
