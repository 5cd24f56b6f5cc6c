//! Rendering helpers for single-line text inputs

use propdesk_app::line_input::LineInput;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Spans for `input` with the cursor drawn as a reversed cell
pub fn input_spans(input: &LineInput, style: Style) -> Vec<Span<'static>> {
    let text = input.text();
    let split = text
        .char_indices()
        .nth(input.cursor())
        .map(|(offset, _)| offset)
        .unwrap_or(text.len());
    let (before, rest) = text.split_at(split);

    let mut chars = rest.chars();
    let under_cursor = chars.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = chars.collect();

    vec![
        Span::styled(before.to_string(), style),
        Span::styled(under_cursor, style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, style),
    ]
}

/// Keep the end of `text` so it fits in `max_width` columns, marking the cut with `…`
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut width = 1; // the ellipsis
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        kept.push(c);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}
