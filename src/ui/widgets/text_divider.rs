use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{display_width, fit_width, render_lines, rule, RULE_CHAR};
use crate::ui::styles;

/// Where the label sits along the rule.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Cell widths of the three columns of a labelled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerSegments {
    pub leading: u16,
    pub label: u16,
    pub trailing: u16,
}

/// Sizes the bar/label/bar columns for a rule `width` cells wide.
///
/// The label slot is the label plus one cell of padding per side. Left and
/// right alignment keep a one-cell stub of rule on the near side; centering
/// gives the odd cell to the leading bar.
pub fn divider_segments(width: u16, label_width: u16, align: DividerAlign) -> DividerSegments {
    let label = label_width.saturating_add(2).min(width);
    let remaining = width - label;

    let (leading, trailing) = match align {
        DividerAlign::Left => {
            let stub = remaining.min(1);
            (stub, remaining - stub)
        }
        DividerAlign::Right => {
            let stub = remaining.min(1);
            (remaining - stub, stub)
        }
        DividerAlign::Center => {
            let trailing = remaining / 2;
            (remaining - trailing, trailing)
        }
    };

    DividerSegments {
        leading,
        label,
        trailing,
    }
}

/// A horizontal rule interrupted by a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDivider<'a> {
    label: Span<'a>,
    align: DividerAlign,
    fill: char,
}

impl Default for TextDivider<'_> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> TextDivider<'a> {
    pub fn new(label: impl Into<Span<'a>>) -> Self {
        Self {
            label: label.into(),
            align: DividerAlign::default(),
            fill: RULE_CHAR,
        }
    }

    pub fn align(mut self, align: DividerAlign) -> Self {
        self.align = align;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn line(&self, width: u16) -> Line<'a> {
        let label_width = display_width(&self.label.content);
        let segments = divider_segments(width, label_width, self.align);
        let bar_style = styles::divider_style();

        let mut spans = vec![rule(self.fill, segments.leading, bar_style)];

        if label_width.saturating_add(2) <= segments.label {
            spans.push(Span::raw(" "));
            spans.push(self.label.clone());
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::styled(
                fit_width(&self.label.content, usize::from(segments.label)),
                self.label.style,
            ));
        }

        spans.push(rule(self.fill, segments.trailing, bar_style));
        Line::from(spans)
    }
}

impl Widget for TextDivider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&[self.line(area.width)], area, buf);
    }
}
