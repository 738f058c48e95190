use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use super::{ChannelEntry, Divider, TextDivider};
use crate::ui::styles;

/// Rows above the first channel: a blank line and the section rule.
const LEADING_ROWS: usize = 2;
const CHANNELS_SECTION_TITLE: &str = "Channels";

/// Workspace title, a "Channels" section, and the channel entries.
#[derive(Debug, Clone)]
pub struct SideBar<'a> {
    title: TextDivider<'a>,
    channels: Vec<ChannelEntry>,
    selected: Option<usize>,
}

impl<'a> SideBar<'a> {
    pub fn new(channels: Vec<ChannelEntry>, title: impl Into<String>) -> Self {
        let title: String = title.into();
        Self {
            title: TextDivider::new(title),
            channels,
            selected: None,
        }
    }

    /// Highlights the channel at `index` (in channel terms).
    pub fn select(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// List row holding the channel at `channel_index`.
    pub fn visual_index(channel_index: usize) -> usize {
        channel_index + LEADING_ROWS
    }

    fn items(&self, width: u16) -> Vec<ListItem<'a>> {
        let mut items = vec![
            ListItem::new(Divider::new(' ').line(width)),
            ListItem::new(TextDivider::new(CHANNELS_SECTION_TITLE).line(width)),
        ];
        items.extend(self.channels.iter().cloned().map(ListItem::from));
        items
    }
}

impl Widget for SideBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, footer_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        self.title.clone().render(header_area, buf);

        let selected = self
            .selected
            .filter(|&index| index < self.channels.len())
            .map(Self::visual_index);
        let list = List::new(self.items(body_area.width))
            .highlight_style(styles::active_channel_style());
        let mut list_state = ListState::default();
        list_state.select(selected);
        StatefulWidget::render(list, body_area, buf, &mut list_state);

        Divider::default().render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infra::config::IconConfig, test_support::render_to_lines};

    fn entries(icons: &IconConfig) -> Vec<ChannelEntry> {
        vec![
            ChannelEntry::new("general", false, icons),
            ChannelEntry::new("ops", true, icons),
        ]
    }

    #[test]
    fn visual_index_skips_blank_line_and_section_rule() {
        assert_eq!(SideBar::visual_index(0), 2);
        assert_eq!(SideBar::visual_index(3), 5);
    }

    #[test]
    fn renders_title_section_channels_and_footer() {
        let icons = IconConfig::ascii();
        let side_bar = SideBar::new(entries(&icons), "acme");

        let rows = render_to_lines(side_bar, 16, 7);

        assert_eq!(rows[0], "─ acme ─────────");
        assert_eq!(rows[1].trim(), "");
        assert_eq!(rows[2], "─ Channels ─────");
        assert!(rows[3].starts_with(" # general"));
        assert!(rows[4].starts_with(" ! ops"));
        assert_eq!(rows[6], "────────────────");
    }

    #[test]
    fn selected_channel_row_is_highlighted() {
        let icons = IconConfig::ascii();
        let side_bar = SideBar::new(entries(&icons), "acme").select(Some(1));
        let area = Rect::new(0, 0, 16, 7);
        let mut buf = Buffer::empty(area);

        side_bar.render(area, &mut buf);

        let highlight = styles::active_channel_style().bg.expect("bg set");
        assert_eq!(buf.cell((0, 4)).map(|cell| cell.bg), Some(highlight));
        assert_ne!(buf.cell((0, 3)).map(|cell| cell.bg), Some(highlight));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let icons = IconConfig::ascii();
        let side_bar = SideBar::new(entries(&icons), "acme").select(Some(9));
        let area = Rect::new(0, 0, 16, 7);
        let mut buf = Buffer::empty(area);

        side_bar.render(area, &mut buf);

        let highlight = styles::active_channel_style().bg.expect("bg set");
        for y in 0..7 {
            assert_ne!(buf.cell((0, y)).map(|cell| cell.bg), Some(highlight));
        }
    }

    #[test]
    fn empty_title_renders_gap_in_rule() {
        let rows = render_to_lines(SideBar::new(Vec::new(), ""), 6, 3);

        assert_eq!(rows[0], "─  ───");
    }
}
