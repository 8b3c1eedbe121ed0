//! Static settings-style demo: a literal-composed tree with toggles,
//! right-detail rows, a custom profile cell, and two levels of drill-down.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::delegate::{ControlEvent, Delegate};
use crate::core::state::App;
use crate::core::style::CellStyle;
use crate::model::{Item, ItemData, Payload, Section, Table};
use crate::tui::{CellContext, CellRenderer, RendererMap};

/// Build the settings demo: app plus its custom cell registrations.
pub fn app() -> (App, RendererMap) {
    let mut renderers = RendererMap::new();
    renderers.register("profile", Box::new(ProfileCell));
    (
        App::new(table(), Box::new(SettingsDelegate)),
        renderers,
    )
}

fn table() -> Table {
    Table::new("settings")
        .with_title("Settings")
        .with_section(
            Section::new("account").with_item(
                Item::new("profile").with_data(
                    ItemData::titled("Sam Appleseed")
                        .with_detail("Account, devices & backup")
                        .with_image("avatar"),
                ),
            ),
        )
        .with_section(
            Section::new("connectivity")
                .with_header("Connectivity")
                .with_item(
                    Item::new("airplane-mode")
                        .with_data(ItemData::titled("Airplane Mode").with_custom(on(false))),
                )
                .with_item(
                    Item::new("wifi")
                        .with_data(ItemData::titled("Wi-Fi").with_detail("Home"))
                        .with_table(wifi_table()),
                )
                .with_item(
                    Item::new("bluetooth")
                        .with_data(ItemData::titled("Bluetooth").with_detail("On")),
                ),
        )
        .with_section(
            Section::new("system")
                .with_header("System")
                .with_item(
                    Item::new("general")
                        .with_data(ItemData::titled("General"))
                        .with_table(general_table()),
                )
                .with_footer("Network settings are managed per profile."),
        )
}

fn wifi_table() -> Table {
    Table::new("wifi")
        .with_title("Wi-Fi")
        .with_section(
            Section::new("switch").with_item(
                Item::new("wifi-enabled")
                    .with_data(ItemData::titled("Wi-Fi").with_custom(on(true))),
            ),
        )
        .with_section(
            Section::new("networks")
                .with_header("Choose a network")
                .with_item(network("Home", "connected"))
                .with_item(network("Attic", "weak signal"))
                .with_item(network("Espresso Guest", "open"))
                .with_footer("Known networks join automatically."),
        )
}

fn network(name: &str, detail: &str) -> Item {
    Item::new("network").with_data(ItemData::titled(name).with_detail(detail))
}

fn general_table() -> Table {
    Table::new("general")
        .with_title("General")
        .with_section(
            Section::new("info")
                .with_item(
                    Item::new("about")
                        .with_data(ItemData::titled("About"))
                        .with_table(about_table()),
                )
                .with_item(
                    Item::new("software-update")
                        .with_data(ItemData::titled("Software Update").with_detail("Up to date")),
                ),
        )
}

fn about_table() -> Table {
    Table::new("about")
        .with_title("About")
        .with_section(
            Section::new("facts")
                .with_item(fact("Name", "drilldown"))
                .with_item(fact("Version", env!("CARGO_PKG_VERSION")))
                .with_item(fact("Rows", "declarative")),
        )
}

fn fact(label: &str, value: &str) -> Item {
    Item::new("fact").with_data(ItemData::titled(value).with_detail(label))
}

fn on(value: bool) -> Payload {
    let mut custom = Payload::new();
    custom.insert("on".into(), serde_json::Value::Bool(value));
    custom
}

struct SettingsDelegate;

impl Delegate for SettingsDelegate {
    fn style(&self, identifier: &str) -> CellStyle {
        match identifier {
            "profile" => CellStyle::custom("profile"),
            "airplane-mode" | "wifi-enabled" => CellStyle::Toggle,
            "wifi" | "bluetooth" | "software-update" => CellStyle::RightDetail,
            "fact" => CellStyle::LeftDetail,
            _ => CellStyle::Basic,
        }
    }

    fn handle(&mut self, item: &Item, event: ControlEvent) -> Option<String> {
        match event {
            ControlEvent::ToggleChanged(state) => Some(format!(
                "{} {}",
                item.display_title(),
                if state { "enabled" } else { "disabled" }
            )),
            ControlEvent::Activated if item.identifier == "network" => {
                Some(format!("Joined \"{}\"", item.display_title()))
            }
            _ => None,
        }
    }
}

/// Two-line profile cell: bold name over a dim account summary.
struct ProfileCell;

impl CellRenderer for ProfileCell {
    fn lines(&self, item: &Item, _ctx: &CellContext) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format!("◉ {}", item.display_title()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", item.detail().unwrap_or_default()),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}
