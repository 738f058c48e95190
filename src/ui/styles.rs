//! Named styles shared by the widgets.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Dividers and breadcrumbs
// =============================================================================

/// Style for horizontal rule fill characters.
pub fn divider_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the glyph between breadcrumb elements.
pub fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for channel titles in headers.
pub fn channel_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the date shown under the channel header.
pub fn history_date_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

// =============================================================================
// Sidebar
// =============================================================================

/// Highlight for the focused channel entry.
pub fn active_channel_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

// =============================================================================
// Messages
// =============================================================================

pub fn datetime_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_user_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for the "(edited)" marker.
pub fn edited_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Message box
// =============================================================================

/// Style for the "... is typing" notice.
pub fn is_typing_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the prompt caption holding the user name.
pub fn prompt_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Blue)
}

/// Style for the arrow glyph closing the prompt caption.
pub fn prompt_arrow_style() -> Style {
    Style::default().fg(Color::Blue)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

// =============================================================================
// Status bar
// =============================================================================

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_channel_style_is_highlighted() {
        let style = active_channel_style();
        assert_eq!(style.bg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn edited_style_is_dim_italic() {
        let style = edited_style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn prompt_arrow_continues_prompt_background() {
        assert_eq!(prompt_arrow_style().fg, prompt_style().bg);
    }

    #[test]
    fn history_date_style_is_bold() {
        assert!(history_date_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
