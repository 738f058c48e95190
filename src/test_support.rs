use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::ui::preview::buffer_lines;

/// Concatenates span contents, ignoring styles.
pub fn line_to_string(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Renders `widget` into a fresh buffer and returns one string per row.
pub fn render_to_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_lines(&buf)
}
