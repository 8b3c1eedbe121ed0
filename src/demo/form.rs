//! Form-style demo: text-input and button cells exercising Edit mode,
//! `TextCommitted` and `ButtonPressed` events.

use std::collections::HashMap;

use crate::core::delegate::{ControlEvent, Delegate};
use crate::core::state::App;
use crate::core::style::CellStyle;
use crate::model::{Item, ItemData, Payload, Section, Table};
use crate::tui::RendererMap;

pub fn app() -> (App, RendererMap) {
    (
        App::new(table(), Box::new(FormDelegate::default())),
        RendererMap::new(),
    )
}

fn table() -> Table {
    Table::new("signup")
        .with_title("Sign Up")
        .with_section(
            Section::new("details")
                .with_header("Your details")
                .with_item(field("name", "Name", "Ada Lovelace"))
                .with_item(field("email", "Email", "ada@example.com"))
                .with_item(field("handle", "Handle", "@ada"))
                .with_footer("Values are kept until the screen is left."),
        )
        .with_section(
            Section::new("actions")
                .with_item(Item::new("submit").with_data(ItemData::titled("Submit"))),
        )
}

fn field(id: &str, title: &str, placeholder: &str) -> Item {
    let mut custom = Payload::new();
    custom.insert("placeholder".into(), serde_json::Value::from(placeholder));
    Item::new(id).with_data(ItemData::titled(title).with_custom(custom))
}

/// Collects committed field values; Submit reports how many were filled in.
#[derive(Default)]
struct FormDelegate {
    values: HashMap<String, String>,
}

impl Delegate for FormDelegate {
    fn style(&self, identifier: &str) -> CellStyle {
        match identifier {
            "submit" => CellStyle::Button,
            _ => CellStyle::TextInput,
        }
    }

    fn handle(&mut self, item: &Item, event: ControlEvent) -> Option<String> {
        match event {
            ControlEvent::TextCommitted(text) => {
                let message = format!("{} saved", item.display_title());
                self.values.insert(item.identifier.clone(), text);
                Some(message)
            }
            ControlEvent::ButtonPressed => {
                let filled = self.values.values().filter(|v| !v.is_empty()).count();
                Some(format!("Submitted {filled} field(s)"))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_a_text_input() {
        let delegate = FormDelegate::default();
        assert_eq!(delegate.style("name"), CellStyle::TextInput);
        assert_eq!(delegate.style("email"), CellStyle::TextInput);
        assert_eq!(delegate.style("submit"), CellStyle::Button);
    }

    #[test]
    fn test_commits_accumulate_into_submit() {
        let mut delegate = FormDelegate::default();
        let name = Item::new("name").with_data(ItemData::titled("Name"));
        let email = Item::new("email").with_data(ItemData::titled("Email"));
        let submit = Item::new("submit").with_data(ItemData::titled("Submit"));

        delegate.handle(&name, ControlEvent::TextCommitted("Ada".to_string()));
        delegate.handle(&email, ControlEvent::TextCommitted(String::new()));
        let message = delegate.handle(&submit, ControlEvent::ButtonPressed);

        // The empty email commit doesn't count as filled.
        assert_eq!(message.as_deref(), Some("Submitted 1 field(s)"));
    }

    #[test]
    fn test_commit_reports_field_name() {
        let mut delegate = FormDelegate::default();
        let name = Item::new("name").with_data(ItemData::titled("Name"));
        let message = delegate.handle(&name, ControlEvent::TextCommitted("x".to_string()));
        assert_eq!(message.as_deref(), Some("Name saved"));
    }
}
