//! # Actions
//!
//! Everything that can happen in navstack becomes an `Action`.
//! User picks a row? That's `Action::Select(record)`.
//! User presses Esc? That's `Action::Back`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter should carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::listing::LinkView;
use crate::core::record::Record;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A record row was tapped.
    Select(Record),
    /// The view-based link row was tapped.
    OpenLink(LinkView),
    Back,
    /// Truncate the path to the given depth.
    PopTo(usize),
    PopToRoot,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} at depth {}", action, app.depth());

    match action {
        Action::Select(record) => {
            // A presented link only exists at depth 0.
            app.presented_link = None;
            app.status_message = format!("Opened {}", record.title());
            app.path.push(record);
        }
        Action::OpenLink(link) => {
            if app.path.is_empty() {
                app.presented_link = Some(link);
                app.status_message = format!("Opened {}", link.label);
            } else {
                debug!("Ignoring link at depth {}", app.depth());
            }
        }
        Action::Back => {
            if app.presented_link.take().is_some() {
                app.status_message = String::from("Back");
            } else if let Some(record) = app.path.pop() {
                app.status_message = format!("Closed {}", record.title());
            }
        }
        Action::PopTo(depth) => {
            if depth < app.depth() {
                app.path.truncate(depth);
                app.status_message = format!("Back to depth {depth}");
            }
            if depth == 0 {
                app.presented_link = None;
            }
        }
        Action::PopToRoot => {
            app.path.pop_to_root();
            app.presented_link = None;
            app.status_message = String::from("Back to root");
        }
        Action::Quit => return Effect::Quit,
    }

    Effect::None
}
