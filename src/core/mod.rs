//! # Core Application Logic
//!
//! Records, sample data, the navigation path and the destination resolver.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App, Screen)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • resolve() (routing)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: `Manufacturer`, `VehicleEntry` and the `Record` union
//! - [`sample`]: the fixed record sets
//! - [`listing`]: rows of the root screen
//! - [`path`]: the navigation path (breadcrumb stack)
//! - [`destination`]: record → destination view
//! - [`state`]: the `App` struct, all navigation state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings resolution (the one module that touches disk)

pub mod action;
pub mod config;
pub mod destination;
pub mod listing;
pub mod path;
pub mod record;
pub mod sample;
pub mod state;
