//! JSON-driven demo: the root table is decoded from an embedded document
//! rather than composed literally, and styles come from an identifier
//! naming convention so the same delegate works for any document.

use crate::core::delegate::{ControlEvent, Delegate};
use crate::core::state::App;
use crate::core::style::CellStyle;
use crate::model::{Item, Mappable, Table};
use crate::tui::RendererMap;

/// The document a `--file`/`--url` source would serve, embedded.
const EMBEDDED: &str = r#"{
    "id": "observatory",
    "title": "Observatory",
    "sections": [
        {
            "id": "planets",
            "header": "Planets",
            "footer": "Distances are from the Sun, rounded.",
            "items": [
                {
                    "id": "planet-detail",
                    "data": { "title": "Mercury", "detail": "58M km" }
                },
                {
                    "id": "planet-detail",
                    "data": { "title": "Earth", "detail": "150M km" },
                    "table": {
                        "id": "earth",
                        "title": "Earth",
                        "sections": [
                            {
                                "id": "moons",
                                "header": "Moons",
                                "items": [
                                    {
                                        "id": "moon-subtitle",
                                        "data": { "title": "Moon", "detail": "The only one" }
                                    }
                                ]
                            }
                        ]
                    }
                },
                {
                    "id": "planet-detail",
                    "data": { "title": "Jupiter", "detail": "778M km" },
                    "table": {
                        "id": "jupiter",
                        "title": "Jupiter",
                        "sections": [
                            {
                                "id": "moons",
                                "header": "Largest moons",
                                "items": [
                                    { "id": "moon-subtitle", "data": { "title": "Ganymede", "detail": "Bigger than Mercury" } },
                                    { "id": "moon-subtitle", "data": { "title": "Europa", "detail": "Subsurface ocean" } },
                                    { "id": "moon-subtitle", "data": { "title": "Io", "detail": "Volcanic" } }
                                ]
                            }
                        ]
                    }
                }
            ]
        },
        {
            "id": "preferences",
            "header": "Preferences",
            "items": [
                { "id": "units-toggle", "data": { "title": "Metric units", "custom": { "on": true } } },
                { "id": "observer-input", "data": { "title": "Observer", "custom": { "placeholder": "Your name" } } }
            ]
        }
    ]
}"#;

pub fn app() -> (App, RendererMap) {
    let table = Table::from_json(EMBEDDED).expect("embedded demo document is valid");
    (
        App::new(table, Box::new(JsonDelegate)),
        RendererMap::new(),
    )
}

/// Styles rows by identifier suffix, so a JSON document picks its own cell
/// styles without code changes:
///
/// ```text
/// *-subtitle  → Subtitle        *-toggle → Toggle
/// *-detail    → RightDetail     *-input  → TextInput
/// *-left      → LeftDetail      *-button → Button
/// ```
///
/// Anything else renders Basic — including identifiers from documents that
/// don't follow the convention.
pub struct JsonDelegate;

impl Delegate for JsonDelegate {
    fn style(&self, identifier: &str) -> CellStyle {
        if identifier.ends_with("-subtitle") {
            CellStyle::Subtitle
        } else if identifier.ends_with("-detail") {
            CellStyle::RightDetail
        } else if identifier.ends_with("-left") {
            CellStyle::LeftDetail
        } else if identifier.ends_with("-toggle") {
            CellStyle::Toggle
        } else if identifier.ends_with("-input") {
            CellStyle::TextInput
        } else if identifier.ends_with("-button") {
            CellStyle::Button
        } else {
            CellStyle::Basic
        }
    }

    fn handle(&mut self, item: &Item, event: ControlEvent) -> Option<String> {
        match event {
            ControlEvent::Activated => Some(format!("Selected {}", item.display_title())),
            ControlEvent::ToggleChanged(on) => Some(format!(
                "{}: {}",
                item.display_title(),
                if on { "on" } else { "off" }
            )),
            ControlEvent::TextCommitted(text) => {
                Some(format!("{} set to \"{text}\"", item.display_title()))
            }
            ControlEvent::ButtonPressed => Some(format!("{} pressed", item.display_title())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowPath;

    #[test]
    fn test_embedded_document_decodes() {
        let (app, _renderers) = app();
        let screen = app.nav.current();
        assert_eq!(screen.title(), "Observatory");
        assert_eq!(screen.section_count(), 2);
        assert_eq!(screen.row_count(0), 3);
        assert_eq!(screen.row_count(1), 2);
    }

    #[test]
    fn test_earth_drills_into_moons() {
        let (app, _renderers) = app();
        let earth = app.nav.current().item_at(RowPath::new(0, 1)).unwrap();
        let child = earth.table.as_ref().unwrap();
        assert_eq!(child.identifier, "earth");
        assert_eq!(child.sections[0].items.len(), 1);
    }

    #[test]
    fn test_suffix_convention_maps_styles() {
        let delegate = JsonDelegate;
        assert_eq!(delegate.style("planet-detail"), CellStyle::RightDetail);
        assert_eq!(delegate.style("moon-subtitle"), CellStyle::Subtitle);
        assert_eq!(delegate.style("units-toggle"), CellStyle::Toggle);
        assert_eq!(delegate.style("observer-input"), CellStyle::TextInput);
        assert_eq!(delegate.style("no-convention"), CellStyle::Basic);
    }
}
