//! # Built-in Demos
//!
//! Three self-contained tables exercising the binding layer end to end:
//!
//! - [`settings`]: a static, literal-composed settings tree — toggles,
//!   right-detail rows, recursive drill-down, and a custom profile cell.
//! - [`form`]: text-input and button cells exercising Edit mode and the
//!   commit/press events.
//! - [`json`]: a table decoded from an embedded JSON document, with a
//!   naming convention mapping identifiers to styles.
//!
//! Each demo returns a ready-to-run `(App, RendererMap)` pair.

pub mod form;
pub mod json;
pub mod settings;
