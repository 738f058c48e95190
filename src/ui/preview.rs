//! Off-screen rendering of single widgets for `rslack preview`.

use anyhow::Result;
use clap::ValueEnum;
use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
    Terminal,
};

use crate::{
    domain::{shell_state::ShellState, workspace::Workspace},
    infra::config::AppConfig,
};

use super::{
    view,
    widgets::{
        BreadCrumbs, ChannelEntry, ChannelHeader, ChatBox, Divider, DividerAlign, MessageBox,
        MessageRow, SideBar, TextDivider,
    },
};

/// Rows used when previewing the whole screen.
const SCREEN_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewWidget {
    Divider,
    TextDivider,
    Breadcrumbs,
    Channel,
    ChannelHeader,
    Message,
    MessageBox,
    Sidebar,
    ChatBox,
    Screen,
}

/// Renders `widget` filled with sample data and returns its rows as text.
pub fn render_preview(
    widget: PreviewWidget,
    width: u16,
    config: &AppConfig,
    now_ms: i64,
) -> Result<Vec<String>> {
    let user = config.workspace.user.as_str();
    let icons = &config.icons;
    let workspace = Workspace::sample(config.workspace.title.clone(), user, now_ms);
    let state = ShellState::new(user, workspace);
    let Some(channel) = state.selected_channel() else {
        return Ok(Vec::new());
    };

    tracing::debug!(?widget, width, "rendering widget preview");

    let lines = match widget {
        PreviewWidget::Divider => render_widget(Divider::default(), width, 1),
        PreviewWidget::TextDivider => render_widget(
            TextDivider::new(channel.name.as_str()).align(DividerAlign::Center),
            width,
            1,
        ),
        PreviewWidget::Breadcrumbs => render_widget(
            BreadCrumbs::new(["rust", "tui", "chat"], icons),
            width,
            1,
        ),
        PreviewWidget::Channel => render_widget(
            ChannelEntry::new(&channel.name, channel.is_private, icons).focused(true),
            width,
            1,
        ),
        PreviewWidget::ChannelHeader => render_widget(
            ChannelHeader::for_channel(channel, "Today", icons),
            width,
            ChannelHeader::HEIGHT,
        ),
        PreviewWidget::Message => {
            let row = MessageRow::new("09:41", user)
                .edited(true)
                .text("The quick brown fox jumps over the lazy dog.");
            let height = row.height(width);
            render_widget(row, width, height)
        }
        PreviewWidget::MessageBox => render_widget(
            MessageBox::new(user, state.input(), icons).typing(channel.typing.as_deref()),
            width,
            MessageBox::HEIGHT,
        ),
        PreviewWidget::Sidebar => {
            let entries: Vec<ChannelEntry> = state
                .workspace()
                .channels
                .iter()
                .map(|c| ChannelEntry::new(&c.name, c.is_private, icons))
                .collect();
            let height = u16::try_from(entries.len() + 4).unwrap_or(u16::MAX);
            let side_bar =
                SideBar::new(entries, state.workspace().title.clone()).select(Some(0));
            render_widget(side_bar, width, height)
        }
        PreviewWidget::ChatBox => {
            let rows = view::message_rows(channel);
            let history: u16 = rows.iter().map(|row| row.height(width)).sum();
            let height = ChannelHeader::HEIGHT + history + MessageBox::HEIGHT;
            let chat_box = ChatBox::new(
                rows,
                ChannelHeader::for_channel(channel, "Today", icons),
                MessageBox::new(user, state.input(), icons).typing(channel.typing.as_deref()),
            );
            render_widget(chat_box, width, height)
        }
        PreviewWidget::Screen => render_screen(&state, width, config)?,
    };

    Ok(lines)
}

fn render_widget<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_lines(&buf)
}

fn render_screen(state: &ShellState, width: u16, config: &AppConfig) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, SCREEN_HEIGHT))?;
    terminal.draw(|frame| view::render(frame, state, config))?;
    Ok(buffer_lines(terminal.backend().buffer()))
}

/// One string per buffer row, cell symbols concatenated.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect()
        })
        .collect()
}
