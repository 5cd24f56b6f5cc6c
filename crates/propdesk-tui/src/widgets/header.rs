//! Header bar widgets
//!
//! The main header shows the app title, where the user is (root, project,
//! file) and the environment badge. The banner warns that Online is read-only.

use propdesk_app::WorkbenchView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

use super::text_input::truncate_start;

/// Main header showing app title, location and environment
pub struct MainHeader<'a> {
    view: &'a WorkbenchView,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: &'a WorkbenchView) -> Self {
        Self { view }
    }

    /// Breadcrumb for the current screen, e.g. `/opt/data/billing › Billing`
    fn location(&self) -> String {
        let view = self.view;
        match (&view.current_project, &view.editor) {
            (_, Some(editor)) => format!(
                "{} › {}",
                view.current_project
                    .as_ref()
                    .map_or(editor.project.as_str(), |p| p.display_path.as_str()),
                editor.file.display_name
            ),
            (Some(project), None) => project.display_path.clone(),
            (None, None) => view
                .root_path
                .clone()
                .unwrap_or_else(|| "not authorized".to_string()),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = " propdesk ";
        let badge = format!(" {} ", self.view.environment.label());
        let dirty = self
            .view
            .editor
            .as_ref()
            .is_some_and(|e| e.dirty)
            .then_some(" ● modified");

        let reserved = title.width() + badge.width() + dirty.map_or(0, |d| d.width()) + 4;
        let location = truncate_start(
            &self.location(),
            (inner.width as usize).saturating_sub(reserved),
        );

        let mut spans = vec![
            Span::styled(title, styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled(location, styles::text_primary()),
        ];
        if let Some(dirty) = dirty {
            spans.push(Span::styled(dirty, styles::status_yellow()));
        }

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (inner.width as usize).saturating_sub(used + badge.width());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            badge,
            styles::environment_badge(self.view.environment),
        ));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// One-line warning shown while the environment is Online
pub struct OnlineBanner;

impl Widget for OnlineBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                " Online ",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Live configuration is read-only. Press e to switch to Local.",
                styles::status_yellow(),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
