//! # Actions
//!
//! Everything that can happen to a bound table becomes an `Action`.
//! User activates a row? That's `Action::Activate(path)`.
//! A source fetch finishes? That's `Action::TableLoaded(table)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an [`Effect`] describing the side effect the caller
//! must perform (spawn a load, sync view state, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the dispatch rules testable without a terminal: feed actions,
//! assert on the nav stack and the delegate's recorded events.

use log::{debug, warn};

use crate::core::binding::Screen;
use crate::core::delegate::ControlEvent;
use crate::core::state::App;
use crate::core::style::CellStyle;
use crate::model::{RowPath, Table};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The row at `path` was selected (Enter).
    Activate(RowPath),
    /// A toggle row was flipped to the given state.
    ToggleFlipped { path: RowPath, on: bool },
    /// A text-input row committed its buffer.
    TextCommitted { path: RowPath, text: String },
    /// Pop the current screen (no-op at the root).
    Back,
    /// Re-fetch the current source, if any.
    Reload,
    /// A source fetch finished; becomes the new root.
    TableLoaded(Table),
    /// A source fetch failed with the given message.
    LoadFailed(String),
    Quit,
}

/// Side effect the caller must perform after `update()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A child screen was pushed; the view layer pushes matching view state.
    Pushed,
    /// The current screen was popped.
    Popped,
    /// The stack was replaced with a freshly loaded root.
    Reset,
    /// Spawn the source fetch fire-and-forget.
    SpawnLoad,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Activate(path) => {
            let Some(item) = app.nav.current().item_at(path).cloned() else {
                return Effect::None;
            };

            // A child table wins over everything: drill down, delegate not
            // consulted.
            if let Some(child) = item.table.clone() {
                let screen = Screen::bind(child, app.delegate.as_ref());
                app.nav.push(screen);
                return Effect::Pushed;
            }

            let style = app.nav.current().style_at(path);
            if !style.selectable() {
                debug!(
                    "row \"{}\" has no selection affordance, ignoring",
                    item.identifier
                );
                return Effect::None;
            }

            let event = if style == CellStyle::Button {
                ControlEvent::ButtonPressed
            } else {
                ControlEvent::Activated
            };
            debug!("dispatch {:?} for \"{}\"", event, item.identifier);
            if let Some(message) = app.delegate.handle(&item, event) {
                app.status_message = message;
            }
            Effect::None
        }

        Action::ToggleFlipped { path, on } => {
            let Some(item) = app.nav.current().item_at(path).cloned() else {
                return Effect::None;
            };
            debug!("toggle \"{}\" -> {}", item.identifier, on);
            if let Some(message) = app.delegate.handle(&item, ControlEvent::ToggleChanged(on)) {
                app.status_message = message;
            }
            Effect::None
        }

        Action::TextCommitted { path, text } => {
            let Some(item) = app.nav.current().item_at(path).cloned() else {
                return Effect::None;
            };
            debug!("text commit on \"{}\"", item.identifier);
            if let Some(message) = app.delegate.handle(&item, ControlEvent::TextCommitted(text)) {
                app.status_message = message;
            }
            Effect::None
        }

        Action::Back => {
            if app.nav.pop() {
                Effect::Popped
            } else {
                Effect::None
            }
        }

        Action::Reload => {
            if app.source.is_none() {
                app.status_message = String::from("No source to reload");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Loading...");
            Effect::SpawnLoad
        }

        Action::TableLoaded(table) => {
            let screen = Screen::bind(table, app.delegate.as_ref());
            app.nav.reset(screen);
            app.is_loading = false;
            app.error = None;
            app.status_message = format!("Loaded \"{}\"", app.nav.current().title());
            Effect::Reset
        }

        Action::LoadFailed(message) => {
            warn!("source load failed: {}", message);
            app.is_loading = false;
            if app.nav.current().table.sections.is_empty() {
                // Nothing to show behind the failure: full-screen error.
                app.error = Some(message);
            } else {
                app.status_message = format!("Load failed: {}", message);
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_app, fixture_table};

    // Fixture paths (see test_support::fixture_table):
    //   (0,0) "plain" Basic   (0,1) "power" Toggle
    //   (0,2) "name"  TextInput   (0,3) "save" Button
    //   (1,0) "more"  Basic with a child table
    const PLAIN: RowPath = RowPath { section: 0, row: 0 };
    const POWER: RowPath = RowPath { section: 0, row: 1 };
    const NAME: RowPath = RowPath { section: 0, row: 2 };
    const SAVE: RowPath = RowPath { section: 0, row: 3 };
    const MORE: RowPath = RowPath { section: 1, row: 0 };

    #[test]
    fn test_activate_with_child_table_drills_down() {
        let (mut app, events) = fixture_app();

        let effect = update(&mut app, Action::Activate(MORE));

        assert_eq!(effect, Effect::Pushed);
        assert_eq!(app.nav.depth(), 2);
        assert_eq!(app.nav.current().table.identifier, "child");
        // The delegate is not consulted on drill-down.
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_activate_selectable_row_raises_primary_action() {
        let (mut app, events) = fixture_app();

        let effect = update(&mut app, Action::Activate(PLAIN));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.depth(), 1);
        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![("plain".to_string(), ControlEvent::Activated)]
        );
    }

    #[test]
    fn test_activate_button_row_raises_button_pressed() {
        let (mut app, events) = fixture_app();

        update(&mut app, Action::Activate(SAVE));

        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![("save".to_string(), ControlEvent::ButtonPressed)]
        );
    }

    #[test]
    fn test_activate_without_selection_affordance_is_silent() {
        let (mut app, events) = fixture_app();

        // Toggle and text-input rows have no selection affordance.
        assert_eq!(update(&mut app, Action::Activate(POWER)), Effect::None);
        assert_eq!(update(&mut app, Action::Activate(NAME)), Effect::None);

        assert!(events.lock().unwrap().is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_activate_out_of_range_path_is_noop() {
        let (mut app, events) = fixture_app();

        let effect = update(&mut app, Action::Activate(RowPath::new(9, 9)));

        assert_eq!(effect, Effect::None);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_and_text_events_carry_values() {
        let (mut app, events) = fixture_app();

        update(&mut app, Action::ToggleFlipped { path: POWER, on: false });
        update(
            &mut app,
            Action::TextCommitted {
                path: NAME,
                text: "Ada".to_string(),
            },
        );

        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![
                ("power".to_string(), ControlEvent::ToggleChanged(false)),
                (
                    "name".to_string(),
                    ControlEvent::TextCommitted("Ada".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_delegate_message_lands_in_status_bar() {
        let (mut app, _events) = fixture_app();

        update(&mut app, Action::Activate(PLAIN));

        assert_eq!(app.status_message, "plain handled");
    }

    #[test]
    fn test_back_pops_and_is_noop_at_root() {
        let (mut app, _events) = fixture_app();
        update(&mut app, Action::Activate(MORE));

        assert_eq!(update(&mut app, Action::Back), Effect::Popped);
        assert_eq!(app.nav.depth(), 1);
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_table_loaded_resets_stack() {
        let (mut app, _events) = fixture_app();
        update(&mut app, Action::Activate(MORE));
        app.is_loading = true;

        let fresh = Table::new("fresh").with_title("Fresh");
        let effect = update(&mut app, Action::TableLoaded(fresh));

        assert_eq!(effect, Effect::Reset);
        assert_eq!(app.nav.depth(), 1);
        assert_eq!(app.nav.current().table.identifier, "fresh");
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "Loaded \"Fresh\"");
    }

    #[test]
    fn test_load_failed_with_content_goes_to_status_bar() {
        let (mut app, _events) = fixture_app();
        app.is_loading = true;

        let effect = update(&mut app, Action::LoadFailed("HTTP 502".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "Load failed: HTTP 502");
    }

    #[test]
    fn test_load_failed_with_nothing_to_show_is_full_screen() {
        let (mut app, _events) = fixture_app();
        // An empty placeholder table, as App::loading starts with.
        update(&mut app, Action::TableLoaded(Table::new("loading")));

        update(&mut app, Action::LoadFailed("connection refused".to_string()));

        assert_eq!(app.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_reload_without_source_does_not_spawn() {
        let (mut app, _events) = fixture_app();

        let effect = update(&mut app, Action::Reload);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "No source to reload");
    }

    #[test]
    fn test_reload_with_source_spawns_load() {
        use crate::source::{SourceError, TableSource};
        use async_trait::async_trait;
        use std::sync::Arc;

        struct StubSource;

        #[async_trait]
        impl TableSource for StubSource {
            fn name(&self) -> &str {
                "stub"
            }
            async fn load(&self) -> Result<Table, SourceError> {
                Ok(fixture_table())
            }
        }

        let (app, _events) = fixture_app();
        let mut app = app.with_source(Arc::new(StubSource));

        let effect = update(&mut app, Action::Reload);

        assert_eq!(effect, Effect::SpawnLoad);
        assert!(app.is_loading);
    }
}
