use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{StatusBar, TableView, TitleBar};

/// Draw one frame: title bar, the bound table (or the error view), key hints.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.nav.breadcrumb().iter().map(|s| s.to_string()).collect(),
        app.status_message.clone(),
        app.is_loading.then_some(spinner_frame),
    );
    title_bar.render(frame, title_area);

    // Main area — show error OR the current screen
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else if let Some(view_state) = tui.views.last_mut() {
        TableView::new(app.nav.current(), view_state, &tui.renderers).render(frame, main_area);
    }

    let mut status_bar = StatusBar::new(tui.mode, app.nav.depth() > 1, app.source.is_some());
    status_bar.render(frame, status_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}
