//! # StatusBar Component
//!
//! Bottom key-hint line. The hints follow the input mode and the current
//! navigation depth, so the user always sees what the keys do right now.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::InputMode;
use crate::tui::component::Component;

/// Bottom bar with context-sensitive key hints.
pub struct StatusBar {
    pub mode: InputMode,
    /// Whether Back currently pops a screen (depth > 1).
    pub can_go_back: bool,
    /// Whether a source is attached (r reloads).
    pub has_source: bool,
}

impl StatusBar {
    pub fn new(mode: InputMode, can_go_back: bool, has_source: bool) -> Self {
        Self {
            mode,
            can_go_back,
            has_source,
        }
    }

    fn hint_text(&self) -> String {
        match self.mode {
            InputMode::Edit => " Enter commit · Esc cancel".to_string(),
            InputMode::Browse => {
                let mut hints = vec!["↑↓ move", "Enter select", "Space toggle"];
                if self.can_go_back {
                    hints.push("← back");
                }
                if self.has_source {
                    hints.push("r reload");
                }
                hints.push("q quit");
                format!(" {}", hints.join(" · "))
            }
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.hint_text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
