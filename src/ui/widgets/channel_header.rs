use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{render_lines, BreadCrumbs, DividerAlign, TextDivider};
use crate::{domain::channel::Channel, infra::config::IconConfig, ui::styles};

/// Three-row banner above the history: title rule, breadcrumbs, date rule.
#[derive(Debug, Clone)]
pub struct ChannelHeader<'a> {
    name: String,
    topic: String,
    date: String,
    member_count: u32,
    is_private: bool,
    starred: bool,
    icons: &'a IconConfig,
}

impl<'a> ChannelHeader<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(name: impl Into<String>, icons: &'a IconConfig) -> Self {
        Self {
            name: name.into(),
            topic: String::new(),
            date: String::new(),
            member_count: 0,
            is_private: false,
            starred: false,
            icons,
        }
    }

    pub fn for_channel(channel: &Channel, date: impl Into<String>, icons: &'a IconConfig) -> Self {
        Self::new(channel.name.clone(), icons)
            .topic(channel.topic.clone())
            .members(channel.member_count)
            .private(channel.is_private)
            .starred(channel.starred)
            .date(date)
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn members(mut self, member_count: u32) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    pub fn lines(&self, width: u16) -> [Line<'static>; 3] {
        let title = Span::styled(
            format!(" {} {}", self.icons.channel_icon(self.is_private), self.name),
            styles::channel_title_style(),
        );

        let crumbs = BreadCrumbs::new(
            [
                self.icons.star_icon(self.starred).to_owned(),
                format!("{} {}", self.icons.person, self.member_count),
                self.topic.clone(),
            ],
            self.icons,
        );

        let date = Span::styled(self.date.clone(), styles::history_date_style());

        [
            TextDivider::new(title).line(width),
            crumbs.line(),
            TextDivider::new(date)
                .align(DividerAlign::Center)
                .line(width),
        ]
    }
}

impl Widget for ChannelHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&self.lines(area.width), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{line_to_string, render_to_lines};

    fn header(icons: &IconConfig) -> ChannelHeader<'_> {
        ChannelHeader::new("general", icons)
            .topic("Announcements")
            .members(42)
            .date("Monday")
    }

    #[test]
    fn first_row_is_title_divider() {
        let icons = IconConfig::ascii();
        let [title, _, _] = header(&icons).lines(20);

        assert_eq!(line_to_string(&title), "─  # general ───────");
    }

    #[test]
    fn second_row_lists_star_members_and_topic() {
        let icons = IconConfig::ascii();
        let [_, crumbs, _] = header(&icons).lines(40);

        assert_eq!(line_to_string(&crumbs), " - > @ 42 > Announcements");
    }

    #[test]
    fn starred_private_channel_uses_full_star_and_lock() {
        let icons = IconConfig::ascii();
        let [title, crumbs, _] = header(&icons).private(true).starred(true).lines(20);

        assert!(line_to_string(&title).contains("! general"));
        assert!(line_to_string(&crumbs).starts_with(" * >"));
    }

    #[test]
    fn third_row_centers_the_date() {
        let icons = IconConfig::ascii();
        let [_, _, date] = header(&icons).lines(14);

        assert_eq!(line_to_string(&date), "─── Monday ───");
    }

    #[test]
    fn date_label_uses_history_date_style() {
        let icons = IconConfig::ascii();
        let [_, _, date] = header(&icons).lines(20);

        let label = date
            .spans
            .iter()
            .find(|span| span.content == "Monday")
            .expect("date span must exist");

        assert_eq!(label.style, styles::history_date_style());
    }

    #[test]
    fn builds_from_channel_model() {
        let icons = IconConfig::ascii();
        let channel = Channel {
            name: "ops".to_owned(),
            topic: "Deploys".to_owned(),
            is_private: true,
            starred: false,
            member_count: 5,
            ..Channel::default()
        };

        let rows = render_to_lines(ChannelHeader::for_channel(&channel, "Today", &icons), 24, 3);

        assert!(rows[0].contains("! ops"));
        assert!(rows[1].contains("@ 5 > Deploys"));
        assert!(rows[2].contains(" Today "));
    }
}
