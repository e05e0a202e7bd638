//! Narration pane rendering
//!
//! Shows the current step's description plus the metric counters, which are
//! monotone across the sequence and so read naturally as running totals.

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the narration pane for the current step.
pub fn render_narration_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = Vec::new();
    match step {
        Some(step) => {
            let style = if step.terminal {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            lines.push(Line::from(Span::styled(step.description.clone(), style)));
            lines.push(Line::from(""));

            // Stable display order for the counters.
            let mut counters: Vec<(&'static str, u64)> =
                step.metrics.iter().map(|(&k, &v)| (k, v)).collect();
            counters.sort_by_key(|&(name, _)| name);
            for (name, value) in counters {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>12}: ", name),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                    Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Generate a sequence to begin",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
