//! # Table View Component
//!
//! The bound list widget: renders one [`Screen`]'s sections and rows, moves
//! a cursor over the item rows, and emits high-level [`TableViewEvent`]s for
//! the run loop to turn into actions.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - [`TableViewState`] lives in `TuiState`, one per screen on the nav
//!   stack, so cursor positions and control values survive Back.
//! - [`TableView`] is created each frame with borrowed state.
//!
//! Control values (toggle on/off, text buffers) are owned here, seeded from
//! the item payloads at bind time. The model stays immutable; commits are
//! reported upward as events.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::binding::Screen;
use crate::core::style::CellStyle;
use crate::model::RowPath;
use crate::tui::component::Component;
use crate::tui::components::cells::{CellContext, RendererMap, cell_lines};
use crate::tui::event::TuiEvent;

/// Rows jumped by PageUp/PageDown.
const PAGE_JUMP: usize = 10;

/// Persistent per-screen view state.
pub struct TableViewState {
    /// Item row paths in display order; the cursor moves over exactly these.
    paths: Vec<RowPath>,
    /// Style per path, captured at bind time.
    styles: Vec<CellStyle>,
    /// Cursor position as an index into `paths`.
    pub cursor: Option<usize>,
    pub list_state: ListState,
    toggles: HashMap<RowPath, bool>,
    texts: HashMap<RowPath, String>,
    /// Some = the cursor row is being edited with this buffer.
    edit_buffer: Option<String>,
}

impl TableViewState {
    /// Capture paths and styles from a freshly bound screen and seed the
    /// control values from the item payloads (`"on"`, `"value"`).
    pub fn new(screen: &Screen) -> Self {
        let paths = screen.table.item_paths();
        let styles: Vec<CellStyle> = paths.iter().map(|&p| screen.style_at(p)).collect();

        let mut toggles = HashMap::new();
        let mut texts = HashMap::new();
        for (&path, style) in paths.iter().zip(&styles) {
            let Some(item) = screen.item_at(path) else {
                continue;
            };
            match style {
                CellStyle::Toggle => {
                    toggles.insert(path, item.custom_bool("on").unwrap_or(false));
                }
                CellStyle::TextInput => {
                    texts.insert(
                        path,
                        item.custom_str("value").unwrap_or_default().to_string(),
                    );
                }
                _ => {}
            }
        }

        let cursor = if paths.is_empty() { None } else { Some(0) };
        Self {
            paths,
            styles,
            cursor,
            list_state: ListState::default(),
            toggles,
            texts,
            edit_buffer: None,
        }
    }

    pub fn cursor_path(&self) -> Option<RowPath> {
        self.cursor.map(|i| self.paths[i])
    }

    fn cursor_style(&self) -> Option<&CellStyle> {
        self.cursor.map(|i| &self.styles[i])
    }

    pub fn toggle_on(&self, path: RowPath) -> bool {
        self.toggles.get(&path).copied().unwrap_or(false)
    }

    pub fn text_value(&self, path: RowPath) -> Option<&str> {
        self.texts.get(&path).map(String::as_str)
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Handle a key in Browse mode.
    pub fn handle_browse(&mut self, event: &TuiEvent) -> Option<TableViewEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor_by(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor_by(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_cursor_by(-(PAGE_JUMP as isize));
                None
            }
            TuiEvent::PageDown => {
                self.move_cursor_by(PAGE_JUMP as isize);
                None
            }
            TuiEvent::Submit => {
                let path = self.cursor_path()?;
                match self.cursor_style()? {
                    CellStyle::Toggle => Some(self.flip_toggle(path)),
                    CellStyle::TextInput => {
                        let current = self.text_value(path).unwrap_or_default().to_string();
                        self.edit_buffer = Some(current);
                        Some(TableViewEvent::EditStarted(path))
                    }
                    _ => Some(TableViewEvent::Activated(path)),
                }
            }
            // Space flips a toggle without leaving Browse.
            TuiEvent::InputChar(' ') => {
                let path = self.cursor_path()?;
                match self.cursor_style()? {
                    CellStyle::Toggle => Some(self.flip_toggle(path)),
                    _ => None,
                }
            }
            TuiEvent::InputChar('r') => Some(TableViewEvent::Reload),
            TuiEvent::InputChar('q') => Some(TableViewEvent::Quit),
            TuiEvent::CursorLeft | TuiEvent::Backspace | TuiEvent::Escape => {
                Some(TableViewEvent::Back)
            }
            _ => None,
        }
    }

    /// Handle a key in Edit mode. Only called while `is_editing()`.
    pub fn handle_edit(&mut self, event: &TuiEvent) -> Option<TableViewEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    buffer.push(*c);
                }
                None
            }
            TuiEvent::Paste(data) => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    // Cells are single-line; newlines paste as spaces.
                    buffer.extend(data.chars().map(|c| if c == '\n' { ' ' } else { c }));
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    buffer.pop();
                }
                None
            }
            TuiEvent::Submit => {
                let path = self.cursor_path()?;
                let text = self.edit_buffer.take()?;
                self.texts.insert(path, text.clone());
                Some(TableViewEvent::EditCommitted { path, text })
            }
            TuiEvent::Escape => {
                self.edit_buffer = None;
                Some(TableViewEvent::EditCancelled)
            }
            _ => None,
        }
    }

    fn flip_toggle(&mut self, path: RowPath) -> TableViewEvent {
        let on = !self.toggle_on(path);
        self.toggles.insert(path, on);
        TableViewEvent::Toggled { path, on }
    }

    fn move_cursor_by(&mut self, delta: isize) {
        if self.paths.is_empty() {
            return;
        }
        let current = self.cursor.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.paths.len() as isize - 1);
        self.cursor = Some(next as usize);
    }
}

/// Events emitted by the table view for the run loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TableViewEvent {
    /// The cursor row was selected.
    Activated(RowPath),
    /// A toggle row was flipped.
    Toggled { path: RowPath, on: bool },
    /// A text-input row entered Edit mode.
    EditStarted(RowPath),
    /// The edit buffer was committed.
    EditCommitted { path: RowPath, text: String },
    /// The edit was abandoned.
    EditCancelled,
    Back,
    Reload,
    Quit,
}

/// Transient render wrapper for the table view.
pub struct TableView<'a> {
    screen: &'a Screen,
    state: &'a mut TableViewState,
    renderers: &'a RendererMap,
}

impl<'a> TableView<'a> {
    pub fn new(
        screen: &'a Screen,
        state: &'a mut TableViewState,
        renderers: &'a RendererMap,
    ) -> Self {
        Self {
            screen,
            state,
            renderers,
        }
    }
}

impl Component for TableView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().padding(Padding::horizontal(1));

        if self.state.paths.is_empty() {
            let empty = Paragraph::new("No rows.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2);
        let cursor_path = self.state.cursor_path();

        // Flatten sections into list rows: header, items, wrapped footer,
        // spacer. Track which flat index holds the cursor row.
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_flat: Option<usize> = None;
        let mut row_index = 0usize;

        for (s, section) in self.screen.table.sections.iter().enumerate() {
            if let Some(header) = self.screen.header(s) {
                items.push(ListItem::new(Line::from(Span::styled(
                    header.to_uppercase(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ))));
            }

            for r in 0..section.items.len() {
                let path = RowPath::new(s, r);
                let Some(item) = self.screen.item_at(path) else {
                    continue;
                };
                let style = &self.state.styles[row_index];
                let selected = cursor_path == Some(path);
                let ctx = CellContext {
                    width: inner_width,
                    selected,
                    toggle_on: self.state.toggle_on(path),
                    text_value: self.state.text_value(path),
                    edit_buffer: if selected {
                        self.state.edit_buffer.as_deref()
                    } else {
                        None
                    },
                };
                if selected {
                    selected_flat = Some(items.len());
                }
                items.push(ListItem::new(cell_lines(item, style, &ctx, self.renderers)));
                row_index += 1;
            }

            if let Some(footer) = self.screen.footer(s) {
                for line in textwrap::wrap(footer, inner_width as usize) {
                    items.push(ListItem::new(Line::from(Span::styled(
                        line.into_owned(),
                        Style::default().fg(Color::DarkGray),
                    ))));
                }
            }

            // Spacer between sections.
            if s + 1 < self.screen.section_count() {
                items.push(ListItem::new(Line::raw("")));
            }
        }

        self.state.list_state.select(selected_flat);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::binding::Screen;
    use crate::test_support::{RecordingDelegate, fixture_table};

    fn fixture_view() -> (Screen, TableViewState) {
        let (delegate, _events) = RecordingDelegate::new();
        let screen = Screen::bind(fixture_table(), &delegate);
        let state = TableViewState::new(&screen);
        (screen, state)
    }

    #[test]
    fn test_state_seeds_control_values_from_payloads() {
        let (_screen, state) = fixture_view();
        // "power" is seeded on, "name" is seeded "Sam".
        assert!(state.toggle_on(RowPath::new(0, 1)));
        assert_eq!(state.text_value(RowPath::new(0, 2)), Some("Sam"));
        assert_eq!(state.cursor_path(), Some(RowPath::new(0, 0)));
    }

    #[test]
    fn test_cursor_moves_over_item_rows_only() {
        let (_screen, mut state) = fixture_view();
        for _ in 0..10 {
            state.handle_browse(&TuiEvent::CursorDown);
        }
        // Clamped to the last item row, crossing the section boundary.
        assert_eq!(state.cursor_path(), Some(RowPath::new(1, 0)));

        state.handle_browse(&TuiEvent::PageUp);
        assert_eq!(state.cursor_path(), Some(RowPath::new(0, 0)));
    }

    #[test]
    fn test_submit_on_plain_row_activates() {
        let (_screen, mut state) = fixture_view();
        let event = state.handle_browse(&TuiEvent::Submit);
        assert_eq!(event, Some(TableViewEvent::Activated(RowPath::new(0, 0))));
    }

    #[test]
    fn test_submit_on_toggle_flips_in_place() {
        let (_screen, mut state) = fixture_view();
        state.handle_browse(&TuiEvent::CursorDown);

        let event = state.handle_browse(&TuiEvent::Submit);

        assert_eq!(
            event,
            Some(TableViewEvent::Toggled {
                path: RowPath::new(0, 1),
                on: false,
            })
        );
        assert!(!state.toggle_on(RowPath::new(0, 1)));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_space_flips_toggle_and_is_inert_elsewhere() {
        let (_screen, mut state) = fixture_view();
        assert_eq!(state.handle_browse(&TuiEvent::InputChar(' ')), None);

        state.handle_browse(&TuiEvent::CursorDown);
        let event = state.handle_browse(&TuiEvent::InputChar(' '));
        assert!(matches!(event, Some(TableViewEvent::Toggled { on: false, .. })));
    }

    #[test]
    fn test_edit_lifecycle_commit() {
        let (_screen, mut state) = fixture_view();
        state.handle_browse(&TuiEvent::CursorDown);
        state.handle_browse(&TuiEvent::CursorDown);

        let started = state.handle_browse(&TuiEvent::Submit);
        assert_eq!(
            started,
            Some(TableViewEvent::EditStarted(RowPath::new(0, 2)))
        );
        assert!(state.is_editing());

        // "Sam" -> "Sa" -> "Sara"
        state.handle_edit(&TuiEvent::Backspace);
        state.handle_edit(&TuiEvent::InputChar('r'));
        state.handle_edit(&TuiEvent::InputChar('a'));
        let committed = state.handle_edit(&TuiEvent::Submit);

        assert_eq!(
            committed,
            Some(TableViewEvent::EditCommitted {
                path: RowPath::new(0, 2),
                text: "Sara".to_string(),
            })
        );
        assert!(!state.is_editing());
        assert_eq!(state.text_value(RowPath::new(0, 2)), Some("Sara"));
    }

    #[test]
    fn test_edit_cancel_keeps_old_value() {
        let (_screen, mut state) = fixture_view();
        state.handle_browse(&TuiEvent::CursorDown);
        state.handle_browse(&TuiEvent::CursorDown);
        state.handle_browse(&TuiEvent::Submit);

        state.handle_edit(&TuiEvent::InputChar('x'));
        let event = state.handle_edit(&TuiEvent::Escape);

        assert_eq!(event, Some(TableViewEvent::EditCancelled));
        assert_eq!(state.text_value(RowPath::new(0, 2)), Some("Sam"));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let (_screen, mut state) = fixture_view();
        state.handle_browse(&TuiEvent::CursorDown);
        state.handle_browse(&TuiEvent::CursorDown);
        state.handle_browse(&TuiEvent::Submit);

        state.handle_edit(&TuiEvent::Paste("a\nb".to_string()));
        let committed = state.handle_edit(&TuiEvent::Submit);

        assert_eq!(
            committed,
            Some(TableViewEvent::EditCommitted {
                path: RowPath::new(0, 2),
                text: "Sama b".to_string(),
            })
        );
    }

    #[test]
    fn test_browse_keys_map_to_navigation_events() {
        let (_screen, mut state) = fixture_view();
        assert_eq!(
            state.handle_browse(&TuiEvent::CursorLeft),
            Some(TableViewEvent::Back)
        );
        assert_eq!(
            state.handle_browse(&TuiEvent::InputChar('r')),
            Some(TableViewEvent::Reload)
        );
        assert_eq!(
            state.handle_browse(&TuiEvent::InputChar('q')),
            Some(TableViewEvent::Quit)
        );
    }

    #[test]
    fn test_render_smoke() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let (screen, mut state) = fixture_view();
        let renderers = RendererMap::new();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TableView::new(&screen, &mut state, &renderers).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("CONTROLS"));
        assert!(text.contains("Plain"));
        assert!(text.contains("● on"));
        assert!(text.contains("Select More to drill down."));
    }
}
