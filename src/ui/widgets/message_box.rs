use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use super::{render_lines, Divider, TextDivider};
use crate::{
    domain::message_input_state::MessageInputState, infra::config::IconConfig, ui::styles,
};

/// Compose area: typing notice or rule, the prompt line, closing rule.
#[derive(Debug, Clone)]
pub struct MessageBox<'a> {
    user: &'a str,
    typing: Option<&'a str>,
    input: &'a MessageInputState,
    icons: &'a IconConfig,
}

impl<'a> MessageBox<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(user: &'a str, input: &'a MessageInputState, icons: &'a IconConfig) -> Self {
        Self {
            user,
            typing: None,
            input,
            icons,
        }
    }

    /// Names the member shown as typing above the prompt.
    pub fn typing(mut self, typing: Option<&'a str>) -> Self {
        self.typing = typing;
        self
    }

    fn caption(&self) -> [Span<'a>; 2] {
        [
            Span::styled(format!(" {}", self.user), styles::prompt_style()),
            Span::styled(
                format!("{} ", self.icons.full_divider),
                styles::prompt_arrow_style(),
            ),
        ]
    }

    fn caption_width(&self) -> usize {
        self.caption().iter().map(Span::width).sum()
    }

    /// Input text visible in `available` cells and the cursor column in it.
    ///
    /// Leading characters scroll out of view so the cursor stays visible.
    fn visible_input(&self, available: usize) -> (String, usize) {
        let chars: Vec<char> = self.input.text().chars().collect();
        let cursor = self.input.cursor_position().min(chars.len());
        let char_width = |ch: &char| ch.width().unwrap_or(0);

        let mut start = 0;
        let mut before_cursor: usize = chars[..cursor].iter().map(char_width).sum();
        while start < cursor && before_cursor >= available.max(1) {
            before_cursor -= char_width(&chars[start]);
            start += 1;
        }

        (chars[start..].iter().collect(), before_cursor)
    }

    pub fn top_line(&self, width: u16) -> Line<'static> {
        match self.typing {
            Some(name) => TextDivider::new(Span::styled(
                format!("{} {} is typing...", self.icons.keyboard, name),
                styles::is_typing_style(),
            ))
            .line(width),
            None => Divider::default().line(width),
        }
    }

    pub fn prompt_line(&self, width: u16) -> Line<'a> {
        let available = usize::from(width).saturating_sub(self.caption_width());
        let (visible, _) = self.visible_input(available);

        let mut spans = self.caption().to_vec();
        spans.push(Span::styled(visible, styles::input_text_style()));
        Line::from(spans)
    }

    pub fn lines(&self, width: u16) -> [Line<'a>; 3] {
        [
            self.top_line(width),
            self.prompt_line(width),
            Divider::default().line(width),
        ]
    }

    /// Terminal cursor position for the prompt when drawn into `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let caption_width = self.caption_width();
        let available = usize::from(area.width).saturating_sub(caption_width);
        let (_, cursor_column) = self.visible_input(available);

        let offset = u16::try_from(caption_width + cursor_column).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(1);
        let max_y = area.bottom().saturating_sub(1);

        Position::new(
            area.x.saturating_add(offset).min(max_x),
            area.y.saturating_add(1).min(max_y),
        )
    }
}

impl Widget for MessageBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&self.lines(area.width), area, buf);
    }
}
