//! # StatusBar Component
//!
//! Bottom line: key hints for the active screen on the left, the latest
//! status message on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::Screen;
use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub screen: &'a Screen,
    pub status_message: &'a str,
}

pub fn hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Root => " ↑↓ Move  Enter Open  q Quit ",
        Screen::Link(_) => " Esc Back  q Quit ",
        Screen::Destination(_) => " Esc Back  Home Root  0-9 Depth  q Quit ",
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        let dim = Style::default().fg(Color::DarkGray);
        frame.render_widget(Line::styled(hints(self.screen), dim), left);
        frame.render_widget(
            Line::styled(self.status_message, dim).right_aligned(),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::{DestinationView, Tint};
    use crate::core::listing::INTRO_LINK;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_hints_per_screen() {
        assert!(hints(&Screen::Root).contains("Enter Open"));
        assert!(hints(&Screen::Link(INTRO_LINK)).contains("Esc Back"));
        let dest = Screen::Destination(DestinationView {
            title: "GM".to_string(),
            tint: Tint::Indigo,
            caption: None,
        });
        assert!(hints(&dest).contains("Home Root"));
    }

    #[test]
    fn test_render_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                StatusBar {
                    screen: &Screen::Root,
                    status_message: "Opened GM",
                }
                .render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Quit"));
        assert!(text.trim_end().ends_with("Opened GM"));
    }
}
