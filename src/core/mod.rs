//! # Core Binding Logic
//!
//! This module contains the data-binding layer between the view-model tree
//! and whatever widget displays it. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Screen (binding)     │
//!                    │  • NavStack (drill-down)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │    Web     │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`style`]: The closed set of cell styles and their selection affordances
//! - [`delegate`]: The per-screen handler keyed by item identifier
//! - [`binding`]: `Screen` — one table bound with its style registrations
//! - [`navigation`]: `NavStack` — the drill-down screen stack
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod binding;
pub mod config;
pub mod delegate;
pub mod navigation;
pub mod state;
pub mod style;
