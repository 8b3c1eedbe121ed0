//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::core::delegate::{ControlEvent, Delegate};
use crate::core::state::App;
use crate::core::style::CellStyle;
use crate::model::{Item, ItemData, Section, Table};

/// Events a [`RecordingDelegate`] has received, shared with the test body.
pub type RecordedEvents = Arc<Mutex<Vec<(String, ControlEvent)>>>;

/// A delegate that records every event it receives and styles the fixture
/// table's control rows.
pub struct RecordingDelegate {
    pub events: RecordedEvents,
}

impl RecordingDelegate {
    pub fn new() -> (Self, RecordedEvents) {
        let events: RecordedEvents = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl Delegate for RecordingDelegate {
    fn style(&self, identifier: &str) -> CellStyle {
        match identifier {
            "power" => CellStyle::Toggle,
            "name" => CellStyle::TextInput,
            "save" => CellStyle::Button,
            _ => CellStyle::Basic,
        }
    }

    fn handle(&mut self, item: &Item, event: ControlEvent) -> Option<String> {
        self.events
            .lock()
            .unwrap()
            .push((item.identifier.clone(), event));
        Some(format!("{} handled", item.identifier))
    }
}

/// A table exercising every control row plus a drill-down child:
///
/// ```text
/// (0,0) "plain"  Basic
/// (0,1) "power"  Toggle      (seeded on)
/// (0,2) "name"   TextInput   (seeded "Sam")
/// (0,3) "save"   Button
/// (1,0) "more"   Basic, child table "child"
/// ```
pub fn fixture_table() -> Table {
    let mut power_custom = crate::model::Payload::new();
    power_custom.insert("on".into(), serde_json::Value::Bool(true));
    let mut name_custom = crate::model::Payload::new();
    name_custom.insert("value".into(), serde_json::Value::from("Sam"));

    let child = Table::new("child").with_title("Child").with_section(
        Section::new("child-rows").with_item(Item::new("leaf")),
    );

    Table::new("root")
        .with_title("Root")
        .with_section(
            Section::new("controls")
                .with_header("Controls")
                .with_item(Item::new("plain").with_data(ItemData::titled("Plain")))
                .with_item(
                    Item::new("power")
                        .with_data(ItemData::titled("Power").with_custom(power_custom)),
                )
                .with_item(
                    Item::new("name")
                        .with_data(ItemData::titled("Name").with_custom(name_custom)),
                )
                .with_item(Item::new("save").with_data(ItemData::titled("Save"))),
        )
        .with_section(
            Section::new("nav")
                .with_footer("Select More to drill down.")
                .with_item(Item::new("more").with_data(ItemData::titled("More")).with_table(child)),
        )
}

/// Creates a test App bound to the fixture table with a recording delegate.
pub fn fixture_app() -> (App, RecordedEvents) {
    let (delegate, events) = RecordingDelegate::new();
    (App::new(fixture_table(), Box::new(delegate)), events)
}
