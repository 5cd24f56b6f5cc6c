//! Status bar widget
//!
//! Key hints for the current screen and input mode, plus a busy indicator
//! while the engine is still working on a command.

use propdesk_app::state::{AppState, Screen, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, action)` pairs for the current mode
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode() {
            UiMode::ConfirmDialog => &[("y", "yes"), ("n", "no")],
            UiMode::DirectoryPrompt => &[("Enter", "open"), ("Esc", "cancel")],
            UiMode::Notification => &[("Enter", "dismiss")],
            UiMode::SearchInput => &[
                ("Enter", "done"),
                ("↓/↑", "next/prev"),
                ("Esc", "clear"),
            ],
            UiMode::EditCell => &[("Enter", "apply"), ("Esc", "cancel")],
            UiMode::Normal => self.screen_hints(),
        }
    }

    fn screen_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.screen() {
            Screen::Authorization => &[("Enter", "authorize"), ("q", "quit")],
            Screen::Projects => &[
                ("Enter", "open"),
                ("r", "refresh"),
                ("e", "env"),
                ("p", "root"),
                ("q", "quit"),
            ],
            Screen::Files => &[
                ("Enter", "open"),
                ("Esc", "back"),
                ("r", "refresh"),
                ("e", "env"),
                ("q", "quit"),
            ],
            Screen::Editor if self.state.view.is_local() => &[
                ("Enter", "edit"),
                ("Tab", "column"),
                ("a", "add"),
                ("d", "delete"),
                ("s", "save"),
                ("/", "search"),
                ("Esc", "close"),
            ],
            Screen::Editor => &[
                ("/", "search"),
                ("n/N", "next/prev"),
                ("e", "env"),
                ("Esc", "close"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if self.state.settings.ui.show_key_hints {
            for (key, action) in self.hints() {
                spans.push(Span::styled(*key, styles::keybinding()));
                spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
            }
        }

        if self.state.is_busy() {
            let busy = " working… ";
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let padding = (area.width as usize).saturating_sub(used + busy.width());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(busy, styles::status_yellow()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
