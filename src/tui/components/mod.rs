//! # TUI Components
//!
//! All UI components for the terminal interface, in two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: breadcrumb trail, status message, loading spinner
//! - `StatusBar`: context-sensitive key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TableView`: the bound list — cursor, control values, edit buffer
//!
//! All three draw through the `Component` trait. Key handling is modal and
//! lives on `TableViewState` (`handle_browse`/`handle_edit`), not on a
//! trait: which method a key goes to depends on the input mode.
//!
//! The cell line builders in [`cells`] are plain functions: one per style,
//! composed by `TableView` per row.
//!
//! Each component file contains everything related to that component —
//! state types, event types, rendering, event handling, tests.

pub mod cells;
pub mod status_bar;
pub mod table_view;
pub mod title_bar;

pub use cells::{CellContext, CellRenderer, RendererMap};
pub use status_bar::StatusBar;
pub use table_view::{TableView, TableViewEvent, TableViewState};
pub use title_bar::TitleBar;
