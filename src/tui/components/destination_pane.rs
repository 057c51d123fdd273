//! # Destination Panes
//!
//! Stateless renderers for whatever sits on top of the navigation path:
//!
//! - `DestinationPane`: fills the area with the resolved tint and centers
//!   the caption (vehicles) on it. Manufacturers get a bare color fill.
//! - `LinkPane`: the fixed view behind the root-level link row.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::destination::DestinationView;
use crate::core::listing::LinkView;
use crate::tui::component::Component;
use crate::tui::theme::{caption_color, tint_color};

pub struct DestinationPane<'a> {
    pub view: &'a DestinationView,
    pub true_color: bool,
}

impl Component for DestinationPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let background = tint_color(self.view.tint, self.true_color);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        if let Some(caption) = &self.view.caption {
            let style = Style::default()
                .bg(background)
                .fg(caption_color(self.view.tint))
                .add_modifier(Modifier::BOLD);
            let paragraph = Paragraph::new(Line::from(caption.as_str()).centered()).style(style);
            frame.render_widget(paragraph, centered_line(area));
        }
    }
}

pub struct LinkPane {
    pub link: LinkView,
}

impl Component for LinkPane {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Line::from(self.link.body).centered())
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, centered_line(area));
    }
}

/// The single middle row of `area`.
fn centered_line(area: Rect) -> Rect {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    line
}
