//! # TitleBar Component
//!
//! Top line: the breadcrumb trail from the root to the active screen.
//!
//! ```text
//! Navigation › Ford › 2022 Ford Escape
//! ```
//!
//! The last crumb is bold. Clicking an earlier crumb pops back to that
//! depth, so the bar also does its own hit testing from the same widths it
//! renders with.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const SEPARATOR: &str = " › ";

pub struct TitleBar {
    pub crumbs: Vec<String>,
}

impl TitleBar {
    pub fn new(crumbs: Vec<String>) -> Self {
        Self { crumbs }
    }

    /// Index of the crumb drawn at `column`, relative to the bar's left edge.
    /// Separators are not part of any crumb.
    pub fn crumb_at(&self, column: u16) -> Option<usize> {
        let column = column as usize;
        let mut start = 0usize;
        for (index, crumb) in self.crumbs.iter().enumerate() {
            let end = start + crumb.width();
            if (start..end).contains(&column) {
                return Some(index);
            }
            start = end + SEPARATOR.width();
        }
        None
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let last = self.crumbs.len().saturating_sub(1);
        let mut spans = Vec::with_capacity(self.crumbs.len() * 2);
        for (index, crumb) in self.crumbs.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let style = if index == last {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(crumb.as_str(), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn crumbs(items: &[&str]) -> TitleBar {
        TitleBar::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_render_trail() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = crumbs(&["Navigation", "GM", "1996 GM Trailblazer"]);

        terminal
            .draw(|f| {
                let area = f.area();
                bar.render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.starts_with("Navigation › GM › 1996 GM Trailblazer"));
    }

    #[test]
    fn test_crumb_at() {
        // "Navigation › Ford › Escape"
        //  0         10  13  17  20
        let bar = crumbs(&["Navigation", "Ford", "Escape"]);
        assert_eq!(bar.crumb_at(0), Some(0));
        assert_eq!(bar.crumb_at(9), Some(0));
        assert_eq!(bar.crumb_at(10), None);
        assert_eq!(bar.crumb_at(11), None);
        assert_eq!(bar.crumb_at(13), Some(1));
        assert_eq!(bar.crumb_at(16), Some(1));
        assert_eq!(bar.crumb_at(17), None);
        assert_eq!(bar.crumb_at(20), Some(2));
        assert_eq!(bar.crumb_at(26), None);
    }

    #[test]
    fn test_root_only() {
        let bar = crumbs(&["Navigation"]);
        assert_eq!(bar.crumb_at(3), Some(0));
        assert_eq!(bar.crumb_at(12), None);
    }
}
