//! Notification popup

use propdesk_app::state::Notification;
use propdesk_app::TITLE_ERROR;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, modal_width};

pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    /// Notifications queued behind this one
    pending: usize,
}

impl<'a> NotificationPopup<'a> {
    pub fn new(notification: &'a Notification, pending: usize) -> Self {
        Self {
            notification,
            pending,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = modal_width(&self.notification.message, 36, area);
        let modal_area = centered_rect(width, 7, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(&self.notification.title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let message_style = if self.notification.title == TITLE_ERROR {
            styles::status_red()
        } else {
            styles::text_primary()
        };
        Paragraph::new(self.notification.message.as_str())
            .alignment(Alignment::Center)
            .style(message_style)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let mut footer = vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" dismiss", styles::text_muted()),
        ];
        if self.pending > 0 {
            footer.push(Span::styled(
                format!("  (+{} more)", self.pending),
                styles::text_muted(),
            ));
        }
        Paragraph::new(Line::from(footer))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
