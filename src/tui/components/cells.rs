//! # Cell Line Builders
//!
//! One rendering path per [`CellStyle`], pushing an [`Item`]'s content into
//! styled lines for the list widget. Runtime control values (toggle state,
//! text buffers) arrive through [`CellContext`] — they live in the view
//! state, never in the model.
//!
//! Custom cells are resolved by key against a [`RendererMap`]; unknown keys
//! fall back to the basic rendering rather than failing.

use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::style::CellStyle;
use crate::model::Item;

/// Marker shown in front of rows that carry an image reference. A terminal
/// can't render the image itself.
const IMAGE_MARKER: &str = "◇ ";

/// Runtime values for one row, borrowed from the view state.
pub struct CellContext<'a> {
    /// Inner width available for the line, in columns.
    pub width: u16,
    /// Whether the cursor is on this row.
    pub selected: bool,
    /// Current toggle state (Toggle rows).
    pub toggle_on: bool,
    /// Committed text value (TextInput rows).
    pub text_value: Option<&'a str>,
    /// Some = this row is being edited with the given buffer.
    pub edit_buffer: Option<&'a str>,
}

impl Default for CellContext<'_> {
    fn default() -> Self {
        Self {
            width: 80,
            selected: false,
            toggle_on: false,
            text_value: None,
            edit_buffer: None,
        }
    }
}

/// A custom cell rendering, registered by key in a [`RendererMap`].
pub trait CellRenderer {
    fn lines(&self, item: &Item, ctx: &CellContext) -> Vec<Line<'static>>;
}

/// Registry of custom cell renderers, keyed by the `CellStyle::Custom` key.
#[derive(Default)]
pub struct RendererMap {
    renderers: HashMap<String, Box<dyn CellRenderer>>,
}

impl RendererMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, renderer: Box<dyn CellRenderer>) {
        self.renderers.insert(key.into(), renderer);
    }

    pub fn get(&self, key: &str) -> Option<&dyn CellRenderer> {
        self.renderers.get(key).map(Box::as_ref)
    }
}

/// Build the lines for one row. The row's style decides the layout; the
/// item supplies the content.
pub fn cell_lines(
    item: &Item,
    style: &CellStyle,
    ctx: &CellContext,
    renderers: &RendererMap,
) -> Vec<Line<'static>> {
    match style {
        CellStyle::Basic => vec![basic_line(item, ctx)],
        CellStyle::Subtitle => subtitle_lines(item, ctx),
        CellStyle::LeftDetail => vec![left_detail_line(item, ctx)],
        CellStyle::RightDetail => vec![right_detail_line(item, ctx)],
        CellStyle::Button => vec![button_line(item, ctx)],
        CellStyle::Toggle => vec![toggle_line(item, ctx)],
        CellStyle::TextInput => vec![text_input_line(item, ctx)],
        CellStyle::Custom(key) => match renderers.get(key) {
            Some(renderer) => renderer.lines(item, ctx),
            // Unknown key: render as Basic, never fail.
            None => vec![basic_line(item, ctx)],
        },
    }
}

fn basic_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    Line::from(Span::raw(truncate(
        &titled(item),
        ctx.width as usize,
    )))
}

fn subtitle_lines(item: &Item, ctx: &CellContext) -> Vec<Line<'static>> {
    let mut lines = vec![basic_line(item, ctx)];
    if let Some(detail) = item.detail() {
        lines.push(Line::from(Span::styled(
            truncate(&format!("  {detail}"), ctx.width as usize),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn left_detail_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    let detail = item.detail().unwrap_or_default();
    let title = titled(item);
    let line = Line::from(vec![
        Span::styled(detail.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(title),
    ]);
    clamp_line(line, ctx.width as usize)
}

fn right_detail_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    two_column(
        Span::raw(titled(item)),
        Span::styled(
            item.detail().unwrap_or_default().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        ctx.width as usize,
    )
}

fn button_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    let title = truncate(item.display_title(), ctx.width as usize);
    let pad = (ctx.width as usize).saturating_sub(title.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn toggle_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    let (glyph, style) = if ctx.toggle_on {
        ("● on", Style::default().fg(Color::Green))
    } else {
        ("○ off", Style::default().fg(Color::DarkGray))
    };
    two_column(Span::raw(titled(item)), Span::styled(glyph.to_string(), style), ctx.width as usize)
}

fn text_input_line(item: &Item, ctx: &CellContext) -> Line<'static> {
    let value = if let Some(buffer) = ctx.edit_buffer {
        // Editing: show the buffer with a block cursor.
        Span::styled(format!("{buffer}█"), Style::default().fg(Color::Yellow))
    } else if let Some(value) = ctx.text_value.filter(|v| !v.is_empty()) {
        Span::raw(value.to_string())
    } else {
        // Empty value: fall back to the item's placeholder, dimmed.
        Span::styled(
            item.custom_str("placeholder").unwrap_or_default().to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    two_column(Span::raw(titled(item)), value, ctx.width as usize)
}

/// Display title with the image marker prefixed when the item carries an
/// image reference.
fn titled(item: &Item) -> String {
    let has_image = item
        .data
        .as_ref()
        .is_some_and(|d| d.image.is_some());
    if has_image {
        format!("{IMAGE_MARKER}{}", item.display_title())
    } else {
        item.display_title().to_string()
    }
}

/// Left span leading, right span right-aligned, spaces in between. When the
/// two don't fit, the left side gives way.
fn two_column(left: Span<'static>, right: Span<'static>, width: usize) -> Line<'static> {
    let right_width = right.content.width();
    let left_max = width.saturating_sub(right_width + 2);
    let left_text = truncate(&left.content, left_max);
    let gap = width
        .saturating_sub(left_text.width())
        .saturating_sub(right_width);
    Line::from(vec![
        Span::styled(left_text, left.style),
        Span::raw(" ".repeat(gap)),
        right,
    ])
}

/// Truncate to `max_width` columns, appending an ellipsis when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Re-truncate a multi-span line that overflows the width.
fn clamp_line(line: Line<'static>, width: usize) -> Line<'static> {
    let total: usize = line.spans.iter().map(|s| s.content.width()).sum();
    if total <= width {
        return line;
    }
    let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    Line::from(Span::raw(truncate(&joined, width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemData;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn item(title: &str) -> Item {
        Item::new("row").with_data(ItemData::titled(title))
    }

    #[test]
    fn test_basic_line_shows_title() {
        let lines = cell_lines(
            &item("Hello"),
            &CellStyle::Basic,
            &CellContext::default(),
            &RendererMap::new(),
        );
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Hello");
    }

    #[test]
    fn test_subtitle_adds_dim_second_line() {
        let item = Item::new("row").with_data(ItemData::titled("Title").with_detail("Detail"));
        let lines = cell_lines(
            &item,
            &CellStyle::Subtitle,
            &CellContext::default(),
            &RendererMap::new(),
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[1]), "  Detail");
    }

    #[test]
    fn test_right_detail_is_right_aligned() {
        let item = Item::new("row").with_data(ItemData::titled("Wi-Fi").with_detail("Home"));
        let ctx = CellContext {
            width: 20,
            ..Default::default()
        };
        let lines = cell_lines(&item, &CellStyle::RightDetail, &ctx, &RendererMap::new());
        let text = line_text(&lines[0]);
        assert_eq!(text.len(), 20);
        assert!(text.starts_with("Wi-Fi"));
        assert!(text.ends_with("Home"));
    }

    #[test]
    fn test_toggle_reflects_runtime_state() {
        let on = CellContext {
            toggle_on: true,
            ..Default::default()
        };
        let off = CellContext::default();
        let lines_on = cell_lines(&item("Power"), &CellStyle::Toggle, &on, &RendererMap::new());
        let lines_off = cell_lines(&item("Power"), &CellStyle::Toggle, &off, &RendererMap::new());
        assert!(line_text(&lines_on[0]).contains("● on"));
        assert!(line_text(&lines_off[0]).contains("○ off"));
    }

    #[test]
    fn test_text_input_shows_edit_buffer_with_cursor() {
        let ctx = CellContext {
            edit_buffer: Some("Ad"),
            ..Default::default()
        };
        let lines = cell_lines(&item("Name"), &CellStyle::TextInput, &ctx, &RendererMap::new());
        assert!(line_text(&lines[0]).contains("Ad█"));
    }

    #[test]
    fn test_text_input_falls_back_to_placeholder() {
        let mut custom = crate::model::Payload::new();
        custom.insert("placeholder".into(), serde_json::Value::from("Required"));
        let item = Item::new("row").with_data(ItemData::titled("Name").with_custom(custom));
        let lines = cell_lines(
            &item,
            &CellStyle::TextInput,
            &CellContext::default(),
            &RendererMap::new(),
        );
        assert!(line_text(&lines[0]).contains("Required"));
    }

    #[test]
    fn test_unknown_custom_key_renders_as_basic() {
        let lines = cell_lines(
            &item("Profile"),
            &CellStyle::custom("never-registered"),
            &CellContext::default(),
            &RendererMap::new(),
        );
        assert_eq!(line_text(&lines[0]), "Profile");
    }

    #[test]
    fn test_registered_custom_renderer_wins() {
        struct Banner;
        impl CellRenderer for Banner {
            fn lines(&self, item: &Item, _ctx: &CellContext) -> Vec<Line<'static>> {
                vec![Line::from(format!("** {} **", item.display_title()))]
            }
        }
        let mut renderers = RendererMap::new();
        renderers.register("banner", Box::new(Banner));
        let lines = cell_lines(
            &item("Profile"),
            &CellStyle::custom("banner"),
            &CellContext::default(),
            &renderers,
        );
        assert_eq!(line_text(&lines[0]), "** Profile **");
    }

    #[test]
    fn test_image_reference_renders_as_marker() {
        let item = Item::new("row").with_data(ItemData::titled("Photo").with_image("photo.png"));
        let lines = cell_lines(
            &item,
            &CellStyle::Basic,
            &CellContext::default(),
            &RendererMap::new(),
        );
        assert_eq!(line_text(&lines[0]), "◇ Photo");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("héllo wörld", 8), "héllo w…");
    }
}
