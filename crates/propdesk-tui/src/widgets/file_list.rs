//! Config file list widget: display name and on-disk name side by side

use propdesk_core::ConfigFile;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::styles;

pub struct FileList<'a> {
    project: &'a str,
    files: &'a [ConfigFile],
    selected: usize,
}

impl<'a> FileList<'a> {
    pub fn new(project: &'a str, files: &'a [ConfigFile], selected: usize) -> Self {
        Self {
            project,
            files,
            selected,
        }
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} · {} files ", self.project, self.files.len());
        let block = styles::glass_block(true).title(title);

        if self.files.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No .properties files in config-cache/. Esc to go back.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let header = Row::new(vec![Cell::from("Name"), Cell::from("File")])
            .style(styles::accent_bold());

        let rows = self.files.iter().map(|file| {
            Row::new(vec![
                Cell::from(file.display_name.as_str()).style(styles::text_primary()),
                Cell::from(file.file_name.as_str()).style(styles::text_secondary()),
            ])
        });

        let table = Table::new(
            rows,
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
        .header(header)
        .block(block)
        .row_highlight_style(styles::focused_selected())
        .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
