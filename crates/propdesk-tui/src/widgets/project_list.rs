//! Project list widget

use propdesk_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::styles;

pub struct ProjectList<'a> {
    projects: &'a [Project],
    selected: usize,
}

impl<'a> ProjectList<'a> {
    pub fn new(projects: &'a [Project], selected: usize) -> Self {
        Self { projects, selected }
    }
}

impl Widget for ProjectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Projects ({}) ", self.projects.len());
        let block = styles::glass_block(true).title(title);

        if self.projects.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No projects found under data/. Press r to refresh.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .projects
            .iter()
            .map(|project| {
                ListItem::new(Line::from(vec![
                    Span::styled(project.name.as_str(), styles::text_primary()),
                    Span::raw("  "),
                    Span::styled(project.display_path.as_str(), styles::text_muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
