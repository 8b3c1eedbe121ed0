//! Cell styles: the closed set of built-in row renderings plus an escape
//! hatch for custom cells registered by key.

/// How a row is rendered and which control it carries.
///
/// The style for a row is chosen by the delegate from the item's identifier
/// when the table is bound; `Basic` is the fallback for anything the
/// delegate doesn't recognize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellStyle {
    /// Title only.
    #[default]
    Basic,
    /// Title with the detail text on a second, dimmer line.
    Subtitle,
    /// Detail label leading, title trailing.
    LeftDetail,
    /// Title leading, detail right-aligned.
    RightDetail,
    /// A centered action row; activation raises `ButtonPressed`.
    Button,
    /// An on/off switch; flipping raises `ToggleChanged`.
    Toggle,
    /// An editable text field; committing raises `TextCommitted`.
    TextInput,
    /// Custom cell resolved by key against the renderer registry in the
    /// view layer. Unknown keys render as `Basic`.
    Custom(String),
}

impl CellStyle {
    pub fn custom(key: impl Into<String>) -> Self {
        CellStyle::Custom(key.into())
    }

    /// Whether selecting the row raises the primary action. Toggle and
    /// text-input rows have no selection affordance: their control reacts
    /// to dedicated events instead.
    pub fn selectable(&self) -> bool {
        !matches!(self, CellStyle::Toggle | CellStyle::TextInput)
    }
}
