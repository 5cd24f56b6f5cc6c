//! Main render/view function (View in TEA pattern)


use propdesk_app::state::{AppState, InputMode, Screen, UiMode};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI from state.
///
/// Pure: nothing in `state` changes while drawing.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let screen = state.screen();
    let show_banner = screen != Screen::Authorization && !state.view.is_local();
    let show_search = state.input_mode == InputMode::SearchInput
        || state
            .view
            .editor
            .as_ref()
            .is_some_and(|e| !e.search.query.is_empty());
    let areas = layout::create(area, show_banner, show_search && screen == Screen::Editor);

    frame.render_widget(widgets::MainHeader::new(&state.view), areas.header);
    if let Some(banner) = areas.banner {
        frame.render_widget(widgets::OnlineBanner, banner);
    }

    render_body(frame, state, screen, areas.body);

    if let (Some(search_area), Some(editor)) = (areas.search, &state.view.editor) {
        let mut search = widgets::SearchInput::new(&editor.search);
        if state.ui_mode() == UiMode::SearchInput {
            search = search.active(&state.search_input);
        }
        frame.render_widget(search, search_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    render_overlays(frame, state, area);
}

fn render_body(frame: &mut Frame, state: &AppState, screen: Screen, area: Rect) {
    match screen {
        Screen::Authorization => {
            frame.render_widget(AuthorizationPanel::new(&state.settings.root.name), area)
        }
        Screen::Projects => frame.render_widget(
            widgets::ProjectList::new(&state.view.projects, state.selection.project),
            area,
        ),
        Screen::Files => {
            let project = state
                .view
                .current_project
                .as_ref()
                .map_or("", |p| p.name.as_str());
            frame.render_widget(
                widgets::FileList::new(project, &state.view.files, state.selection.file),
                area,
            );
        }
        Screen::Editor => {
            if let Some(editor) = &state.view.editor {
                let mut table = widgets::EntryTable::new(
                    editor,
                    state.selection.row,
                    state.selection.column,
                );
                if state.ui_mode() == UiMode::EditCell {
                    table = table.editing(&state.cell_input);
                }
                frame.render_widget(table, area);
            }
        }
    }
}

/// Dialogs, most modal on top
fn render_overlays(frame: &mut Frame, state: &AppState, area: Rect) {
    if let Some(notification) = state.current_notification() {
        frame.render_widget(
            widgets::NotificationPopup::new(notification, state.notifications.len() - 1),
            area,
        );
    }

    if state.prompt_reply.is_some() {
        frame.render_widget(
            widgets::DirectoryPrompt::new(&state.prompt_input, &state.settings.root.name),
            area,
        );
    }

    if let Some(dialog) = &state.confirm_dialog_state {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
}

/// Landing screen before a root has been granted
struct AuthorizationPanel<'a> {
    root_name: &'a str,
}

impl<'a> AuthorizationPanel<'a> {
    fn new(root_name: &'a str) -> Self {
        Self { root_name }
    }
}

impl Widget for AuthorizationPanel<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = styles::glass_block(true).title(" Authorization ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("propdesk needs access to the {} directory.", self.root_name),
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                format!(
                    "It reads {0}/data/*/config-cache and {0}/settings/server.properties.",
                    self.root_name
                ),
                styles::text_secondary(),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to choose the directory.", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
