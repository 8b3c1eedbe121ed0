//! # drilldown
//!
//! A declarative data-binding layer between a hierarchical view-model
//! (tables, sections, items) and a terminal list widget:
//!
//! - [`model`]: the view-model tree and the JSON mapping convention.
//! - [`core`]: binding, cell styles, delegate dispatch, drill-down
//!   navigation, the `update()` reducer, configuration.
//! - [`source`]: async providers of root tables (file, HTTP).
//! - [`tui`]: the ratatui adapter.
//! - [`demo`]: built-in example tables.

pub mod core;
pub mod demo;
pub mod model;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;
