use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::render_lines;
use crate::{infra::config::IconConfig, ui::styles};

/// Places `delimiter` between consecutive items.
///
/// `[a, b, c]` becomes `[a, sep, b, sep, c]`; empty input stays empty.
pub fn intersperse<I>(items: I, delimiter: I::Item) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut joined = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.push(delimiter.clone());
        }
        joined.push(item);
    }

    joined
}

/// Short fragments on one line joined by the divider glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadCrumbs<'a> {
    elements: Vec<Span<'a>>,
    separator: Span<'a>,
}

impl<'a> BreadCrumbs<'a> {
    pub fn new<I, S>(elements: I, icons: &IconConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Span<'a>>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            separator: Span::styled(format!(" {} ", icons.divider), styles::separator_style()),
        }
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(intersperse(
            self.elements.iter().cloned(),
            self.separator.clone(),
        ));
        Line::from(spans)
    }
}

impl Widget for BreadCrumbs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(&[self.line()], area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{line_to_string, render_to_lines};

    #[test]
    fn intersperse_places_separator_between_items() {
        let joined = intersperse(["a", "b", "c"], "|");

        assert_eq!(joined, vec!["a", "|", "b", "|", "c"]);
    }

    #[test]
    fn intersperse_single_item_has_no_separator() {
        assert_eq!(intersperse([1], 0), vec![1]);
    }

    #[test]
    fn intersperse_empty_input_is_empty() {
        let joined: Vec<&str> = intersperse(Vec::<&str>::new(), "|");

        assert!(joined.is_empty());
    }

    #[test]
    fn intersperse_output_length_is_items_plus_separators() {
        for count in 1..6 {
            let items: Vec<usize> = (0..count).collect();
            assert_eq!(intersperse(items, 99).len(), 2 * count - 1);
        }
    }

    #[test]
    fn crumbs_start_with_a_space_and_use_divider_glyph() {
        let crumbs = BreadCrumbs::new(["*", "@ 12", "topic"], &IconConfig::ascii());

        assert_eq!(line_to_string(&crumbs.line()), " * > @ 12 > topic");
    }

    #[test]
    fn separator_uses_separator_style() {
        let crumbs = BreadCrumbs::new(["a", "b"], &IconConfig::ascii());
        let line = crumbs.line();

        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[2].style, styles::separator_style());
    }

    #[test]
    fn no_elements_renders_only_leading_space() {
        let crumbs = BreadCrumbs::new(Vec::<String>::new(), &IconConfig::ascii());

        assert_eq!(line_to_string(&crumbs.line()), " ");
    }

    #[test]
    fn renders_with_nerd_font_divider() {
        let rows = render_to_lines(BreadCrumbs::new(["a", "b"], &IconConfig::nerd()), 8, 1);

        assert_eq!(rows, vec![" a \u{E0B1} b  "]);
    }
}
