//! # View-Model Tree
//!
//! Plain value types describing what a screen should display:
//!
//! ```text
//! Table
//! ├── identifier            // stable id for the whole screen
//! ├── title                 // shown in the title bar / breadcrumb
//! └── sections: [Section]
//!     ├── header / footer
//!     └── items: [Item]
//!         ├── identifier    // also the cell style registration key
//!         ├── data          // display fields (title, detail, image, custom)
//!         └── table         // optional child table → drill-down
//! ```
//!
//! Models are immutable value data: constructed once (literally or decoded
//! from JSON via [`crate::model::mapping`]) and consumed by exactly one bound
//! screen at a time. Runtime control values (toggle on/off, text buffers)
//! live in the view layer, never here.

use serde_json::{Map, Value};

use crate::model::mapping::{
    self, MapError, Mappable,
};

/// Opaque payload carried by tables, sections and items (the JSON `"data"`
/// object for tables/sections, `"custom"` for items).
pub type Payload = Map<String, Value>;

/// Index pair addressing one item row: section index + row index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Root view-model node: title + ordered sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub identifier: String,
    pub title: Option<String>,
    pub sections: Vec<Section>,
    pub payload: Option<Payload>,
}

impl Table {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Item at `path`, or `None` if either index is out of range.
    pub fn item_at(&self, path: RowPath) -> Option<&Item> {
        self.sections.get(path.section)?.items.get(path.row)
    }

    /// Paths of every item row in display order. The cursor in the view
    /// layer moves over exactly this sequence.
    pub fn item_paths(&self) -> Vec<RowPath> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| {
                (0..section.items.len()).map(move |r| RowPath::new(s, r))
            })
            .collect()
    }

    /// Distinct item identifiers in first-seen order. One cell style is
    /// registered per entry when the table is bound to a screen.
    pub fn distinct_identifiers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for section in &self.sections {
            for item in &section.items {
                if !seen.contains(&item.identifier.as_str()) {
                    seen.push(item.identifier.as_str());
                }
            }
        }
        seen
    }
}

/// Grouping of items with optional header/footer text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub identifier: String,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub items: Vec<Item>,
    pub payload: Option<Payload>,
}

impl Section {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// Leaf view-model node. The identifier doubles as the cell style key:
/// identifiers are unique only within the registration scope of one screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub identifier: String,
    pub data: Option<ItemData>,
    /// Child table: present → activating this row drills down into it.
    pub table: Option<Table>,
}

impl Item {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: ItemData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Display title, falling back to the identifier when the item carries
    /// no data (an undecorated row still renders something meaningful).
    pub fn display_title(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.title.as_deref())
            .unwrap_or(&self.identifier)
    }

    pub fn detail(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.detail.as_deref())
    }

    /// String value out of the item's custom payload (`"value"`,
    /// `"placeholder"`, ...). Non-string values read as absent.
    pub fn custom_str(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .custom
            .as_ref()?
            .get(key)?
            .as_str()
    }

    /// Bool value out of the item's custom payload (e.g. `"on"` seeding a
    /// toggle cell).
    pub fn custom_bool(&self, key: &str) -> Option<bool> {
        self.data
            .as_ref()?
            .custom
            .as_ref()?
            .get(key)?
            .as_bool()
    }
}

/// Display fields for an item's cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemData {
    pub title: Option<String>,
    pub detail: Option<String>,
    /// Image reference by name. Terminals render this as a glyph marker.
    pub image: Option<String>,
    pub custom: Option<Payload>,
}

impl ItemData {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_custom(mut self, custom: Payload) -> Self {
        self.custom = Some(custom);
        self
    }
}

// ============================================================================
// Mappable impls (wire shape documented in model/mapping.rs)
// ============================================================================

impl Mappable for Table {
    fn from_map(map: &Map<String, Value>) -> Result<Self, MapError> {
        Ok(Table {
            identifier: mapping::required_str(map, "id")?,
            title: mapping::optional_str(map, "title"),
            sections: mapping::objects_array(map, "sections")?,
            payload: mapping::optional_object_map(map, "data"),
        })
    }
}

impl Mappable for Section {
    fn from_map(map: &Map<String, Value>) -> Result<Self, MapError> {
        Ok(Section {
            identifier: mapping::required_str(map, "id")?,
            header: mapping::optional_str(map, "header"),
            footer: mapping::optional_str(map, "footer"),
            items: mapping::objects_array(map, "items")?,
            payload: mapping::optional_object_map(map, "data"),
        })
    }
}

impl Mappable for Item {
    fn from_map(map: &Map<String, Value>) -> Result<Self, MapError> {
        Ok(Item {
            identifier: mapping::required_str(map, "id")?,
            data: mapping::optional_object(map, "data"),
            // Best-effort: a malformed subtable reads as absent rather than
            // failing the item.
            table: mapping::optional_object(map, "table"),
        })
    }
}

impl Mappable for ItemData {
    fn from_map(map: &Map<String, Value>) -> Result<Self, MapError> {
        Ok(ItemData {
            title: mapping::optional_str(map, "title"),
            detail: mapping::optional_str(map, "detail"),
            image: mapping::optional_str(map, "image"),
            custom: mapping::optional_object_map(map, "custom"),
        })
    }
}
