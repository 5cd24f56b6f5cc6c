//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Root path and environment label
    pub header: Rect,

    /// Read-only warning shown while Online
    pub banner: Option<Rect>,

    /// Project list, file list or entry table
    pub body: Rect,

    /// Search bar below the entry table
    pub search: Option<Rect>,

    /// Key hints and busy indicator
    pub status: Rect,
}

/// Split the terminal into header, optional banner, body, optional search bar and status line
pub fn create(area: Rect, show_banner: bool, show_search: bool) -> ScreenAreas {
    let mut constraints = vec![Constraint::Length(3)];
    if show_banner {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3));
    if show_search {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(area);

    let mut index = 0;
    let mut next = || {
        let rect = chunks[index];
        index += 1;
        rect
    };

    let header = next();
    let banner = show_banner.then(&mut next);
    let body = next();
    let search = show_search.then(&mut next);
    let status = next();

    ScreenAreas {
        header,
        banner,
        body,
        search,
        status,
    }
}
