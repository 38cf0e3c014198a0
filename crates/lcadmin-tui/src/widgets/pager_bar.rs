//! Pagination footer line for browse tables.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::action::BrowseView;
use crate::theme;

/// Build the pagination footer: position, jump buffer, page size, and
/// the navigation key hints.
pub fn line(view: &BrowseView, jump_active: bool) -> Line<'static> {
    let total = view.total_pages.max(1);

    let mut spans = vec![
        Span::styled(" ⏮ ◀ ", nav_style(view.page > 1)),
        Span::styled(
            format!("Page {}/{total}", view.page),
            Style::default().fg(theme::DIM_WHITE),
        ),
        Span::styled(" ▶ ⏭ ", nav_style(view.page < total)),
    ];

    if jump_active {
        spans.push(Span::styled("  go to: ", theme::key_hint()));
        spans.push(Span::styled(
            view.page_input.clone(),
            Style::default().fg(theme::LICHEN_YELLOW),
        ));
        spans.push(Span::styled("█", Style::default().fg(theme::LICHEN_YELLOW)));
    }

    spans.push(Span::styled(
        format!("  {}/page", view.page_size),
        theme::key_hint(),
    ));

    if !view.keyword.is_empty() {
        spans.push(Span::styled(
            format!("  search: {}", view.keyword),
            Style::default().fg(theme::SEA_TEAL),
        ));
    }

    if view.scope_label != "All" && !view.scope_label.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", view.scope_label),
            Style::default().fg(theme::CLAY_ORANGE),
        ));
    }

    Line::from(spans)
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(theme::MOSS_GREEN)
    } else {
        theme::key_hint()
    }
}
