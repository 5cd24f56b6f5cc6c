//! Entry table widget
//!
//! Key/value rows of the open file. The selected cell is underlined, rows
//! matching the search query are highlighted and the cell being edited is
//! replaced by its text input.

use propdesk_app::view::EditorView;
use propdesk_core::Column;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::styles;

use super::text_input::input_spans;
use super::LineInput;

pub struct EntryTable<'a> {
    editor: &'a EditorView,
    selected_row: usize,
    selected_column: Column,
    /// Text input replacing the selected cell while editing
    cell_input: Option<&'a LineInput>,
}

impl<'a> EntryTable<'a> {
    pub fn new(editor: &'a EditorView, selected_row: usize, selected_column: Column) -> Self {
        Self {
            editor,
            selected_row,
            selected_column,
            cell_input: None,
        }
    }

    pub fn editing(mut self, input: &'a LineInput) -> Self {
        self.cell_input = Some(input);
        self
    }

    fn title(&self) -> String {
        let marker = if self.editor.dirty { " *" } else { "" };
        format!(
            " {} ({}){} ",
            self.editor.file.display_name, self.editor.file.file_name, marker
        )
    }

    fn row_style(&self, index: usize) -> Style {
        let search = &self.editor.search;
        if search.is_current(index) {
            styles::search_current()
        } else if search.is_match(index) {
            styles::search_match()
        } else {
            Style::default()
        }
    }

    fn cell(&self, index: usize, column: Column, text: &'a str) -> Cell<'a> {
        let selected = index == self.selected_row && column == self.selected_column;
        if !selected {
            return Cell::from(text);
        }

        match self.cell_input {
            Some(input) => Cell::from(Line::from(input_spans(input, styles::text_primary()))),
            None => Cell::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
        }
    }
}

impl Widget for EntryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(self.title());

        if self.editor.rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No entries. Press a to add one (Local only).")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from("Key"),
            Cell::from("Value"),
        ])
        .style(styles::accent_bold());

        let rows: Vec<Row> = self
            .editor
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        format!("{}", index + 1),
                        styles::text_muted(),
                    )),
                    self.cell(index, Column::Key, &row.key),
                    self.cell(index, Column::Value, &row.value),
                ])
                .style(self.row_style(index))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Percentage(40),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

        let mut state = TableState::default().with_selected(Some(self.selected_row));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
