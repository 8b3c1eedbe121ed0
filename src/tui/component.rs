use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable piece of the UI.
///
/// Props arrive as struct fields; `render` draws them into the given area.
/// It takes `&mut self` because the table view updates its list scroll
/// state while drawing — the stateless bars simply read their props.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
