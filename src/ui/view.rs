use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::{
    domain::{
        channel::Channel,
        shell_state::{ActivePane, ShellState},
    },
    infra::config::{AppConfig, IconConfig},
};

use super::{
    styles,
    widgets::{ChannelEntry, ChannelHeader, ChatBox, MessageBox, MessageRow, SideBar},
};

pub fn render(frame: &mut Frame<'_>, state: &ShellState, config: &AppConfig) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [sidebar_area, chat_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(config.ui.sidebar_width),
            Constraint::Min(1),
        ])
        .areas(content_area);

    render_sidebar(frame, sidebar_area, state, &config.icons);
    render_chat(frame, chat_area, state, &config.icons);

    let status =
        Paragraph::new(status_line(state, &config.icons)).style(styles::status_bar_style());
    frame.render_widget(status, status_area);
}

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &ShellState, icons: &IconConfig) {
    let workspace = state.workspace();
    let entries = workspace
        .channels
        .iter()
        .map(|channel| ChannelEntry::new(&channel.name, channel.is_private, icons))
        .collect();

    let side_bar = SideBar::new(entries, workspace.title.clone()).select(state.selected_index());
    frame.render_widget(side_bar, area);
}

fn render_chat(frame: &mut Frame<'_>, area: Rect, state: &ShellState, icons: &IconConfig) {
    let Some(channel) = state.selected_channel() else {
        frame.render_widget(Paragraph::new(" No channels to show"), area);
        return;
    };

    let header = ChannelHeader::for_channel(channel, history_date(channel), icons);
    let message_box = MessageBox::new(state.user(), state.input(), icons)
        .typing(channel.typing.as_deref());

    if state.active_pane() == ActivePane::Compose {
        let [_, _, footer_area] = ChatBox::areas(area);
        frame.set_cursor_position(message_box.cursor_position(footer_area));
    }

    let chat_box = ChatBox::new(message_rows(channel), header, message_box);
    let mut list_state = chat_box.follow_latest();
    frame.render_stateful_widget(chat_box, area, &mut list_state);
}

pub(super) fn message_rows(channel: &Channel) -> Vec<MessageRow> {
    channel
        .messages
        .iter()
        .map(|message| {
            MessageRow::new(format_time(message.timestamp_ms), message.user.clone())
                .edited(message.edited)
                .text(message.text.clone())
        })
        .collect()
}

/// Date label for the header, taken from the newest message.
fn history_date(channel: &Channel) -> String {
    let datetime = match channel.last_activity_ms() {
        Some(timestamp_ms) => match Local.timestamp_millis_opt(timestamp_ms) {
            chrono::LocalResult::Single(dt) => dt,
            chrono::LocalResult::Ambiguous(dt, _) => dt,
            chrono::LocalResult::None => Local::now(),
        },
        None => Local::now(),
    };

    format_history_date(datetime.date_naive())
}

fn format_history_date(date: chrono::NaiveDate) -> String {
    // Format: "Saturday, February 14"
    date.format("%A, %B %-d").to_string()
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::None => "--:--".to_owned(),
    }
}

fn status_line(state: &ShellState, icons: &IconConfig) -> String {
    let nav_hint = match state.active_pane() {
        ActivePane::Sidebar => "j/k: channels | l/Enter: open | q: quit",
        ActivePane::Messages => "i: compose | h/Esc: channels | q: quit",
        ActivePane::Compose => "Enter: send | Esc: stop composing",
    };
    let channel = state
        .selected_channel()
        .map(|channel| format!("{}{}", icons.channel_icon(channel.is_private), channel.name))
        .unwrap_or_else(|| "-".to_owned());

    format!(" {channel} | {nav_hint}")
}
