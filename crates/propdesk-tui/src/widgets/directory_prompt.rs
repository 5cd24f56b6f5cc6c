//! Directory prompt: the terminal's stand-in for a folder picker

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, dim_background};
use super::text_input::input_spans;
use super::LineInput;

pub struct DirectoryPrompt<'a> {
    input: &'a LineInput,
    /// Directory the user is expected to pick, e.g. `opt`
    root_name: &'a str,
}

impl<'a> DirectoryPrompt<'a> {
    pub fn new(input: &'a LineInput, root_name: &'a str) -> Self {
        Self { input, root_name }
    }
}

impl Widget for DirectoryPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(area.width.saturating_sub(8).min(72), 7, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block("Choose directory");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

        Paragraph::new(format!(
            "Path to the {} directory (granted read-write):",
            self.root_name
        ))
        .style(styles::text_secondary())
        .render(chunks[0], buf);

        let mut spans = vec![Span::styled("› ", styles::accent())];
        spans.extend(input_spans(self.input, styles::text_primary()));
        Paragraph::new(Line::from(spans)).render(chunks[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]))
        .render(chunks[4], buf);
    }
}
