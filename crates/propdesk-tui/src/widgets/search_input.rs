//! Search bar widget

use propdesk_app::view::SearchView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::text_input::input_spans;
use super::LineInput;

/// Search bar shown below the entry table
pub struct SearchInput<'a> {
    search: &'a SearchView,
    /// Text being typed; `None` when the bar only shows the last query
    input: Option<&'a LineInput>,
}

impl<'a> SearchInput<'a> {
    pub fn new(search: &'a SearchView) -> Self {
        Self {
            search,
            input: None,
        }
    }

    /// Render the live input with a cursor
    pub fn active(mut self, input: &'a LineInput) -> Self {
        self.input = Some(input);
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            "/",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        )];

        match self.input {
            Some(input) => spans.extend(input_spans(input, styles::text_primary())),
            None => spans.push(Span::styled(
                self.search.query.as_str(),
                styles::text_primary(),
            )),
        }

        if !self.search.query.is_empty() {
            let status_style = if self.search.matches.is_empty() {
                styles::status_red()
            } else {
                styles::status_green()
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(self.search.summary.as_str(), status_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
