//! # Application State
//!
//! Core state for a bound table hierarchy. Domain logic only — presentation
//! state (cursor, list offsets, control values) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavStack                 // stack of bound screens (drill-down)
//! ├── delegate: Box<dyn Delegate>   // style + event handler
//! ├── source: Option<Arc<dyn TableSource>>  // where the root table came from
//! ├── status_message: String        // status bar text
//! ├── is_loading: bool              // a source fetch is in flight
//! └── error: Option<String>         // full-screen error (nothing to show)
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::core::binding::Screen;
use crate::core::delegate::Delegate;
use crate::core::navigation::NavStack;
use crate::model::Table;
use crate::source::TableSource;

pub struct App {
    pub nav: NavStack,
    pub delegate: Box<dyn Delegate>,
    pub source: Option<Arc<dyn TableSource>>,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    /// Bind `root` with `delegate` and start a stack on it.
    pub fn new(root: Table, delegate: Box<dyn Delegate>) -> Self {
        let screen = Screen::bind(root, delegate.as_ref());
        Self {
            nav: NavStack::new(screen),
            delegate,
            source: None,
            status_message: String::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Attach a source the app can (re)load its root table from.
    pub fn with_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// An app that starts empty and waits for its source's first load.
    pub fn loading(source: Arc<dyn TableSource>, delegate: Box<dyn Delegate>) -> Self {
        let placeholder = Table::new("loading").with_title("Loading");
        let mut app = Self::new(placeholder, delegate).with_source(source);
        app.is_loading = true;
        app.status_message = String::from("Loading...");
        app
    }
}
