//! Presentational widgets composed from ratatui primitives.
//!
//! Widgets that can appear inside a list also expose `line(width)` or
//! `lines(width)`, so callers can turn them into `ListItem`s once the
//! column width is known.

mod breadcrumbs;
mod channel;
mod channel_header;
mod chat_box;
mod message;
mod message_box;
mod side_bar;
mod text_divider;

pub use breadcrumbs::{intersperse, BreadCrumbs};
pub use channel::ChannelEntry;
pub use channel_header::ChannelHeader;
pub use chat_box::ChatBox;
pub use message::MessageRow;
pub use message_box::MessageBox;
pub use side_bar::SideBar;
pub use text_divider::{divider_segments, DividerAlign, DividerSegments, TextDivider};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

/// Default fill character for horizontal rules.
pub const RULE_CHAR: char = '─';

/// A full-width horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    fill: char,
    style: Style,
}

impl Default for Divider {
    fn default() -> Self {
        Self::new(RULE_CHAR)
    }
}

impl Divider {
    pub fn new(fill: char) -> Self {
        Self {
            fill,
            style: styles::divider_style(),
        }
    }

    pub fn line(&self, width: u16) -> Line<'static> {
        Line::from(rule(self.fill, width, self.style))
    }
}

impl Widget for Divider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&[self.line(area.width)], area, buf);
    }
}

/// A run of `width` fill characters.
fn rule(fill: char, width: u16, style: Style) -> Span<'static> {
    Span::styled(fill.to_string().repeat(usize::from(width)), style)
}

/// Writes pre-laid-out lines top to bottom, clipped to `area`.
fn render_lines(lines: &[Line<'_>], area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    for (line, y) in lines.iter().zip(area.top()..area.bottom()) {
        buf.set_line(area.x, y, line, area.width);
    }
}

/// Display width of `text` clamped into `u16`.
fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Truncates or right-pads `text` to exactly `width` terminal cells.
fn fit_width(text: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }

    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Greedy word wrap to `width` cells. Words wider than a line are split.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}
