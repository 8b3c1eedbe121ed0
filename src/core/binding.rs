//! # Table Binding
//!
//! A [`Screen`] binds one [`Table`] to the list widget: it owns the model,
//! registers one cell style per distinct item identifier, and answers the
//! widget's data-source questions (section/row counts, header/footer text,
//! item and style lookup) straight off the model's sequences.

use std::collections::HashMap;

use log::debug;

use crate::core::delegate::Delegate;
use crate::core::style::CellStyle;
use crate::model::{Item, RowPath, Table};

/// One registered style per distinct item identifier. Built once at bind
/// time; lookups for identifiers that were never registered fall back to
/// `Basic` rather than failing.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, CellStyle>,
}

impl StyleRegistry {
    /// Walk the table's distinct item identifiers and ask the delegate for
    /// each one's style.
    pub fn collect(table: &Table, delegate: &dyn Delegate) -> Self {
        let mut styles = HashMap::new();
        for identifier in table.distinct_identifiers() {
            styles.insert(identifier.to_owned(), delegate.style(identifier));
        }
        debug!(
            "registered {} cell style(s) for table \"{}\"",
            styles.len(),
            table.identifier
        );
        Self { styles }
    }

    /// Style registered for `identifier`, or `Basic` when unregistered.
    pub fn style_of(&self, identifier: &str) -> CellStyle {
        self.styles.get(identifier).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A table bound for display: the model plus its style registrations.
pub struct Screen {
    pub table: Table,
    registry: StyleRegistry,
}

impl Screen {
    pub fn bind(table: Table, delegate: &dyn Delegate) -> Self {
        let registry = StyleRegistry::collect(&table, delegate);
        Self { table, registry }
    }

    pub fn title(&self) -> &str {
        self.table.title.as_deref().unwrap_or(&self.table.identifier)
    }

    pub fn section_count(&self) -> usize {
        self.table.sections.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.table
            .sections
            .get(section)
            .map_or(0, |s| s.items.len())
    }

    pub fn header(&self, section: usize) -> Option<&str> {
        self.table.sections.get(section)?.header.as_deref()
    }

    pub fn footer(&self, section: usize) -> Option<&str> {
        self.table.sections.get(section)?.footer.as_deref()
    }

    pub fn item_at(&self, path: RowPath) -> Option<&Item> {
        self.table.item_at(path)
    }

    /// Style for the row at `path`; `Basic` when the row doesn't exist or
    /// its identifier was never registered.
    pub fn style_at(&self, path: RowPath) -> CellStyle {
        self.item_at(path)
            .map(|item| self.registry.style_of(&item.identifier))
            .unwrap_or_default()
    }

    pub fn style_of(&self, identifier: &str) -> CellStyle {
        self.registry.style_of(identifier)
    }
}
