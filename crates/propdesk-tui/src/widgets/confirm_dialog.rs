//! Yes/no dialog for engine confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, dim_background, modal_width};
use super::ConfirmDialogState;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let width = modal_width(&self.state.message, 40, area);
        let modal_area = centered_rect(width, 7, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(&self.state.title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let buttons = Line::from(vec![
            Span::styled("[y] ", styles::keybinding()),
            Span::styled(self.state.yes_label.as_str(), styles::status_green()),
            Span::raw("    "),
            Span::styled("[n] ", styles::keybinding()),
            Span::styled(self.state.no_label.as_str(), styles::status_red()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
