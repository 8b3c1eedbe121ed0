//! The per-screen handler: maps item identifiers to cell styles and
//! receives the UI events the binding raises.

use crate::core::style::CellStyle;
use crate::model::Item;

/// A control event raised by a bound row, carrying the current value where
/// the control has one.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Primary action: the row was selected and its style has a selection
    /// affordance.
    Activated,
    /// A button row was pressed.
    ButtonPressed,
    /// A toggle row was flipped to the given state.
    ToggleChanged(bool),
    /// A text-input row committed the given text.
    TextCommitted(String),
}

/// The abstract handler a screen dispatches into, keyed by item identifier.
///
/// `style` is consulted once per distinct identifier when a table is bound
/// (the registration scope); `handle` receives every control event that is
/// not consumed by drill-down navigation. Returning `Some(message)` from
/// `handle` puts feedback in the status bar.
pub trait Delegate {
    fn style(&self, _identifier: &str) -> CellStyle {
        CellStyle::Basic
    }

    fn handle(&mut self, item: &Item, event: ControlEvent) -> Option<String>;
}

/// Delegate that styles everything `Basic` and ignores events. Used for
/// purely navigational tables (e.g. JSON-driven menus with no controls).
pub struct NoopDelegate;

impl Delegate for NoopDelegate {
    fn handle(&mut self, _item: &Item, _event: ControlEvent) -> Option<String> {
        None
    }
}
