//! # Application State
//!
//! Core navigation state for navstack. Domain logic only, no TUI types.
//! Presentation state (highlighted row, colors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── data: SampleData              // fixed record sets
//! ├── path: NavigationPath          // drill-down stack
//! ├── presented_link: Option<LinkView> // view-based link shown over root
//! ├── show_link_row: bool           // whether the root offers the link
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::destination::{DestinationView, resolve};
use crate::core::listing::{LinkView, ListRow, root_rows};
use crate::core::path::NavigationPath;
use crate::core::sample::SampleData;

/// What is currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Root,
    Link(LinkView),
    Destination(DestinationView),
}

pub struct App {
    pub data: SampleData,
    pub path: NavigationPath,
    /// Only ever `Some` while the path is empty.
    pub presented_link: Option<LinkView>,
    pub show_link_row: bool,
    pub status_message: String,
}

impl App {
    pub fn new(data: SampleData) -> Self {
        Self {
            data,
            path: NavigationPath::new(),
            presented_link: None,
            show_link_row: true,
            status_message: String::from("Select a row"),
        }
    }

    pub fn from_config(data: SampleData, config: &ResolvedConfig) -> Self {
        Self {
            show_link_row: config.show_link_row,
            ..Self::new(data)
        }
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    pub fn active_screen(&self) -> Screen {
        match (self.path.top(), self.presented_link) {
            (Some(record), _) => Screen::Destination(resolve(record)),
            (None, Some(link)) => Screen::Link(link),
            (None, None) => Screen::Root,
        }
    }

    /// The screen a truncation to `depth` would show. Depths past the end
    /// of the path clamp to the current screen.
    pub fn screen_at_depth(&self, depth: usize) -> Screen {
        if depth >= self.path.depth() {
            return self.active_screen();
        }
        match depth.checked_sub(1).and_then(|i| self.path.get(i)) {
            Some(record) => Screen::Destination(resolve(record)),
            None => Screen::Root,
        }
    }

    pub fn root_rows(&self) -> Vec<ListRow> {
        root_rows(&self.data, self.show_link_row)
    }

    /// Breadcrumb titles from the root to the active screen.
    pub fn breadcrumbs(&self) -> Vec<String> {
        let mut crumbs = vec![String::from("Navigation")];
        if let Some(link) = self.presented_link {
            crumbs.push(link.label.to_string());
        }
        crumbs.extend(self.path.iter().map(|r| r.title()));
        crumbs
    }

    /// Selects each title in turn, as if its row had been chosen. Titles
    /// that match no record are skipped and returned.
    pub fn open_titles(&mut self, titles: &[String]) -> Vec<String> {
        let mut skipped = Vec::new();
        for title in titles {
            match self.data.find_by_title(title) {
                Some(record) => {
                    update(self, Action::Select(record));
                }
                None => {
                    warn!("--open {:?} matches no record, skipping", title);
                    skipped.push(title.clone());
                }
            }
        }
        skipped
    }
}
