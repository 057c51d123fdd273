//! # Root Listing
//!
//! Flattens the sample data into the rows of the root screen:
//!
//! ```text
//! I am a NavigationLink.      <- link row (optional)
//! Manufacturers               <- header
//!   Ford / GM / Toyota / Chrysler
//! Cars                        <- header
//!   2022 Ford Escape / 1996 GM Trailblazer / 2002 Chrysler SeaBreeze
//! ```
//!
//! Headers are not selectable. Everything else is.

use crate::core::record::Record;
use crate::core::sample::SampleData;

pub const MANUFACTURERS_SECTION: &str = "Manufacturers";
pub const VEHICLES_SECTION: &str = "Cars";

/// A view-based link: its destination is a fixed view, not a path value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkView {
    pub label: &'static str,
    pub body: &'static str,
}

pub const INTRO_LINK: LinkView = LinkView {
    label: "I am a NavigationLink.",
    body: "I'm the view you navigate to.",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Header(&'static str),
    Link(LinkView),
    Record(Record),
}

impl ListRow {
    pub fn is_selectable(&self) -> bool {
        !matches!(self, ListRow::Header(_))
    }

    pub fn text(&self) -> String {
        match self {
            ListRow::Header(title) => title.to_string(),
            ListRow::Link(link) => link.label.to_string(),
            ListRow::Record(record) => record.title(),
        }
    }
}

pub fn root_rows(data: &SampleData, show_link_row: bool) -> Vec<ListRow> {
    let mut rows = Vec::with_capacity(data.manufacturers.len() + data.vehicles.len() + 3);

    if show_link_row {
        rows.push(ListRow::Link(INTRO_LINK));
    }

    rows.push(ListRow::Header(MANUFACTURERS_SECTION));
    rows.extend(
        data.manufacturers
            .iter()
            .cloned()
            .map(|m| ListRow::Record(m.into())),
    );

    rows.push(ListRow::Header(VEHICLES_SECTION));
    rows.extend(
        data.vehicles
            .iter()
            .cloned()
            .map(|v| ListRow::Record(v.into())),
    );

    rows
}

/// Index of the next selectable row after `from` (or before it, when
/// `forward` is false). Stays put at either end.
pub fn step_selection(rows: &[ListRow], from: usize, forward: bool) -> usize {
    let found = if forward {
        rows.iter()
            .enumerate()
            .skip(from + 1)
            .find(|(_, row)| row.is_selectable())
            .map(|(i, _)| i)
    } else {
        rows.iter()
            .enumerate()
            .take(from)
            .rev()
            .find(|(_, row)| row.is_selectable())
            .map(|(i, _)| i)
    };
    found.unwrap_or(from)
}

pub fn first_selectable(rows: &[ListRow]) -> Option<usize> {
    rows.iter().position(ListRow::is_selectable)
}
