use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Back,
    PopToRoot,
    PopTo(usize),

    // TUI-local events (handled by the root list)
    CursorUp,
    CursorDown,
    Submit,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => Some(TuiEvent::Back),
        (_, KeyCode::Char('h')) => Some(TuiEvent::Back),
        (_, KeyCode::Home | KeyCode::Char('r')) => Some(TuiEvent::PopToRoot),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l')) => {
            Some(TuiEvent::Submit)
        }
        (_, KeyCode::Char(c)) => c.to_digit(10).map(|d| TuiEvent::PopTo(d as usize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Back));
        assert_eq!(translate(key(KeyCode::Backspace)), Some(TuiEvent::Back));
        assert_eq!(translate(key(KeyCode::Left)), Some(TuiEvent::Back));
        assert_eq!(translate(key(KeyCode::Home)), Some(TuiEvent::PopToRoot));
        assert_eq!(translate(key(KeyCode::Char('r'))), Some(TuiEvent::PopToRoot));
        assert_eq!(translate(key(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
        assert_eq!(translate(key(KeyCode::Up)), Some(TuiEvent::CursorUp));
    }

    #[test]
    fn test_digits_pop_to_depth() {
        assert_eq!(translate(key(KeyCode::Char('0'))), Some(TuiEvent::PopTo(0)));
        assert_eq!(translate(key(KeyCode::Char('3'))), Some(TuiEvent::PopTo(3)));
        assert_eq!(translate(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ctrl_c), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(4, 7)));
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(100, 40)), Some(TuiEvent::Resize));
    }
}
