//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: breadcrumb trail, with hit testing for clicks
//! - `StatusBar`: key hints and status message
//! - `DestinationPane` / `LinkPane`: the screen on top of the path
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `RootList`: the two-section record list; emits `ListEvent::Activate`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (breadcrumbs)
//! ├── status_bar.rs       (hints + status)
//! ├── root_list.rs        (root screen list)
//! └── destination_pane.rs (destination + link views)
//! ```

mod destination_pane;
mod root_list;
mod status_bar;
mod title_bar;

pub use destination_pane::{DestinationPane, LinkPane};
pub use root_list::{ListEvent, RootList, RootListState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
