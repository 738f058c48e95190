use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{ListItem, Widget},
};

use super::render_lines;
use crate::{infra::config::IconConfig, ui::styles};

/// One selectable row of the channel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    label: String,
    focused: bool,
}

impl ChannelEntry {
    pub fn new(name: &str, is_private: bool, icons: &IconConfig) -> Self {
        Self {
            label: format!(" {} {}", icons.channel_icon(is_private), name),
            focused: false,
        }
    }

    /// Draws the entry with the active highlight when rendered standalone.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn line(&self) -> Line<'static> {
        Line::raw(self.label.clone())
    }
}

impl<'a> From<ChannelEntry> for ListItem<'a> {
    fn from(entry: ChannelEntry) -> Self {
        ListItem::new(entry.line())
    }
}

impl Widget for ChannelEntry {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.focused {
            let row = Rect {
                height: area.height.min(1),
                ..area
            };
            buf.set_style(row, styles::active_channel_style());
        }
        render_lines(&[self.line()], area, buf);
    }
}
