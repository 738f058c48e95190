use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{ListItem, Widget},
};

use super::{fit_width, render_lines, wrap_to_width};
use crate::ui::styles;

/// Width of the `" HH:MM │"` column.
pub const TIME_COLUMN_WIDTH: u16 = 8;
/// Width of the `" (edited) "` column.
pub const EDITED_COLUMN_WIDTH: u16 = 10;

const EDITED_LABEL: &str = " (edited) ";

/// A history row: time | user | edited marker, with the body wrapped below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    time: String,
    user: String,
    edited: bool,
    text: String,
}

impl MessageRow {
    pub fn new(time: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            user: user.into(),
            edited: false,
            text: String::new(),
        }
    }

    pub fn edited(mut self, edited: bool) -> Self {
        self.edited = edited;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Width left for the user column and the body text.
    fn content_width(width: u16) -> usize {
        usize::from(width.saturating_sub(TIME_COLUMN_WIDTH + EDITED_COLUMN_WIDTH))
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let content_width = Self::content_width(width);
        let edited = if self.edited { EDITED_LABEL } else { "" };

        let header = Line::from(vec![
            Span::styled(
                fit_width(&format!(" {} │", self.time), usize::from(TIME_COLUMN_WIDTH)),
                styles::datetime_style(),
            ),
            Span::styled(
                fit_width(&self.user, content_width),
                styles::message_user_style(),
            ),
            Span::styled(
                fit_width(edited, usize::from(EDITED_COLUMN_WIDTH)),
                styles::edited_style(),
            ),
        ]);

        let indent = " ".repeat(usize::from(TIME_COLUMN_WIDTH));
        let mut lines = vec![header];
        lines.extend(wrap_to_width(&self.text, content_width).into_iter().map(|body| {
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(body, styles::message_text_style()),
            ])
        }));

        lines
    }

    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }

    pub fn list_item(&self, width: u16) -> ListItem<'static> {
        ListItem::new(self.lines(width))
    }
}

impl Widget for MessageRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&self.lines(area.width), area, buf);
    }
}
