//! # Model Layer
//!
//! The hierarchical view-model (tables, sections, items) and the JSON
//! mapping convention that decodes it. Pure value data — nothing in this
//! module knows about terminals, widgets, or where the JSON came from.

pub mod mapping;
pub mod table;

pub use mapping::{DecodeError, MapError, Mappable};
pub use table::{Item, ItemData, Payload, RowPath, Section, Table};
