//! # TitleBar Component
//!
//! Top status bar showing where the user is in the drill-down hierarchy and
//! what just happened.
//!
//! Stateless: receives the breadcrumb, the status message, and the loading
//! indicator as props and renders a single line. Priority order keeps the
//! breadcrumb visible on narrow terminals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Top bar: breadcrumb trail, status message, loading spinner.
pub struct TitleBar {
    /// Screen titles from root to current, rendered "Root › Child".
    pub breadcrumb: Vec<String>,
    pub status_message: String,
    /// Some(frame) while a source fetch is in flight.
    pub spinner_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(
        breadcrumb: Vec<String>,
        status_message: String,
        spinner_frame: Option<usize>,
    ) -> Self {
        Self {
            breadcrumb,
            status_message,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(" {}", self.breadcrumb.join(" › ")),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if let Some(frame_index) = self.spinner_frame {
            spans.push(Span::styled(
                format!("  {}", SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]),
                Style::default().fg(Color::Cyan),
            ));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_breadcrumb_joins_titles() {
        let mut title_bar = TitleBar::new(
            vec!["Settings".to_string(), "Wi-Fi".to_string()],
            String::new(),
            None,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Settings › Wi-Fi"));
    }

    #[test]
    fn test_status_message_is_appended() {
        let mut title_bar = TitleBar::new(
            vec!["Settings".to_string()],
            "Wi-Fi enabled".to_string(),
            None,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Settings"));
        assert!(text.contains("Wi-Fi enabled"));
    }

    #[test]
    fn test_spinner_shows_while_loading() {
        let mut title_bar = TitleBar::new(vec!["Loading".to_string()], String::new(), Some(0));
        let text = render_to_text(&mut title_bar);
        assert!(text.contains(SPINNER_FRAMES[0]));
    }
}
