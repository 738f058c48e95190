use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{ChannelHeader, MessageBox, MessageRow};
use crate::ui::styles;

const EMPTY_HISTORY_TEXT: &str = " No messages yet";

/// Frames a channel: header on top, scrolling history, compose box below.
#[derive(Debug, Clone)]
pub struct ChatBox<'a> {
    header: ChannelHeader<'a>,
    messages: Vec<MessageRow>,
    message_box: MessageBox<'a>,
}

impl<'a> ChatBox<'a> {
    pub fn new(
        messages: Vec<MessageRow>,
        header: ChannelHeader<'a>,
        message_box: MessageBox<'a>,
    ) -> Self {
        Self {
            header,
            messages,
            message_box,
        }
    }

    /// Splits `area` into header, history, and footer rows.
    pub fn areas(area: Rect) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ChannelHeader::HEIGHT),
                Constraint::Min(0),
                Constraint::Length(MessageBox::HEIGHT),
            ])
            .areas(area)
    }

    /// List state with the newest message selected, keeping it in view.
    pub fn follow_latest(&self) -> ListState {
        let mut state = ListState::default();
        state.select(self.messages.len().checked_sub(1));
        state
    }
}

impl StatefulWidget for ChatBox<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, history_area, footer_area] = Self::areas(area);

        self.header.render(header_area, buf);

        if self.messages.is_empty() {
            Paragraph::new(EMPTY_HISTORY_TEXT)
                .style(styles::datetime_style())
                .render(history_area, buf);
        } else {
            let items: Vec<ListItem<'static>> = self
                .messages
                .iter()
                .map(|message| message.list_item(history_area.width))
                .collect();
            StatefulWidget::render(List::new(items), history_area, buf, state);
        }

        self.message_box.render(footer_area, buf);
    }
}

impl Widget for ChatBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = self.follow_latest();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
