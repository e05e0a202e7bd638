//! Pseudocode pane rendering
//!
//! Displays the algorithm's fixed pseudocode listing with line numbers and
//! highlights the line the current step is synced to. The highlight always
//! comes from [`synced_line`] over the current step — never from separately
//! tracked UI state — so this pane can never drift from the state pane.
//!
//! [`synced_line`]: crate::code::synced_line

use crate::code::Listing;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Words given keyword coloring in the pseudocode.
const KEYWORDS: &[&str] = &[
    "procedure", "for", "while", "if", "else", "return", "call", "repeat", "push", "pop", "done:",
];

fn highlight_pseudocode(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    for (i, word) in line.split_inclusive(' ').enumerate() {
        let trimmed = word.trim();
        let style = if KEYWORDS.contains(&trimmed) {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        } else if trimmed.chars().all(|c| c.is_ascii_digit()) && !trimmed.is_empty() {
            Style::default().fg(DEFAULT_THEME.number)
        } else if i == 0 && trimmed.ends_with(':') {
            Style::default().fg(DEFAULT_THEME.secondary)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(word.to_string(), style));
    }
    Line::from(spans)
}

/// Render the pseudocode pane with the synced line highlighted.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &Listing,
    highlighted: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", listing.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total = listing.len();

    // Keep the highlighted line inside the visible window.
    if let Some(line) = highlighted {
        let idx = line - 1;
        if idx < *scroll || idx >= *scroll + visible_height {
            *scroll = idx.saturating_sub(visible_height / 2);
        }
    }
    if total > visible_height {
        *scroll = (*scroll).min(total - visible_height);
    } else {
        *scroll = 0;
    }

    let lines: Vec<Line> = listing
        .lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let is_current = highlighted == Some(line_num);
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_pseudocode(text);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:3} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
