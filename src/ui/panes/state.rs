//! Algorithm state pane rendering
//!
//! Draws the current step's payload: the array with its markers for the
//! sorting family, the node table for traversals, the sideways tree for BST,
//! the DP grid for knapsack, and the call stack / memo / pair views for the
//! Fibonacci runners. Everything here reads only the immutable payload of
//! the step being shown.

use crate::step::{
    ArraySnapshot, CallsSnapshot, EdgeClass, GraphSnapshot, Step, StepPayload, TableSnapshot,
    TreeSnapshot,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the state pane for the current step.
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
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
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match step {
        Some(step) => payload_lines(&step.payload),
        None => vec![Line::from(Span::styled(
            "No steps generated yet",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll = (*scroll).min(lines.len() - visible_height);
    } else {
        *scroll = 0;
    }
    let visible: Vec<Line> = lines.into_iter().skip(*scroll).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

fn payload_lines(payload: &StepPayload) -> Vec<Line<'static>> {
    match payload {
        StepPayload::Array(snapshot) => array_lines(snapshot),
        StepPayload::Graph(snapshot) => graph_lines(snapshot),
        StepPayload::Tree(snapshot) => tree_lines(snapshot),
        StepPayload::Table(snapshot) => table_lines(snapshot),
        StepPayload::Calls(snapshot) => calls_lines(snapshot),
    }
}

fn dim() -> Style {
    Style::default().fg(DEFAULT_THEME.comment)
}

fn plain() -> Style {
    Style::default().fg(DEFAULT_THEME.fg)
}

fn array_lines(snapshot: &ArraySnapshot) -> Vec<Line<'static>> {
    let mut value_spans = Vec::new();
    let mut marker_spans = Vec::new();
    let in_pair = |pair: Option<(usize, usize)>, i: usize| {
        pair.is_some_and(|(a, b)| a == i || b == i)
    };

    for (i, value) in snapshot.values.iter().enumerate() {
        let text = format!("{} ", value);
        let width = text.chars().count();
        let (style, marker) = if in_pair(snapshot.comparing, i) {
            (
                Style::default()
                    .fg(DEFAULT_THEME.compare)
                    .add_modifier(Modifier::BOLD),
                '?',
            )
        } else if in_pair(snapshot.swapped, i) || snapshot.placed == Some(i) {
            (
                Style::default()
                    .fg(DEFAULT_THEME.swap)
                    .add_modifier(Modifier::BOLD),
                '^',
            )
        } else if snapshot.settled.contains(&i) {
            (Style::default().fg(DEFAULT_THEME.settled), ' ')
        } else if snapshot
            .region
            .is_some_and(|(lo, hi)| i < lo || i > hi)
        {
            (dim(), ' ')
        } else {
            (plain(), ' ')
        };
        value_spans.push(Span::styled(text, style));
        let mut marks = String::new();
        marks.push(marker);
        for _ in 1..width {
            marks.push(' ');
        }
        marker_spans.push(Span::styled(marks, style));
    }

    let mut lines = vec![Line::from(value_spans), Line::from(marker_spans)];
    if let Some((lo, hi)) = snapshot.region {
        lines.push(Line::from(Span::styled(
            format!("active range: [{}..{}]", lo, hi),
            dim(),
        )));
    }
    if !snapshot.settled.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} of {} in final position", snapshot.settled.len(), snapshot.values.len()),
            Style::default().fg(DEFAULT_THEME.settled),
        )));
    }
    lines
}

fn edge_label(class: EdgeClass) -> (&'static str, Style) {
    match class {
        EdgeClass::Tree => ("tree edge", Style::default().fg(DEFAULT_THEME.success)),
        EdgeClass::Back => (
            "back edge (cycle)",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
        EdgeClass::Finished => ("already finished", Style::default().fg(DEFAULT_THEME.comment)),
        EdgeClass::Arrival => ("arrival edge", Style::default().fg(DEFAULT_THEME.comment)),
        EdgeClass::Enqueued => ("enqueued", Style::default().fg(DEFAULT_THEME.frontier)),
        EdgeClass::AlreadyVisited => {
            ("already visited", Style::default().fg(DEFAULT_THEME.comment))
        }
        EdgeClass::AlreadyQueued => ("already queued", Style::default().fg(DEFAULT_THEME.comment)),
    }
}

fn graph_lines(snapshot: &GraphSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let frontier: Vec<String> = snapshot.frontier.iter().map(|n| n.to_string()).collect();
    lines.push(Line::from(Span::styled(
        format!("frontier: [{}]", frontier.join(", ")),
        Style::default().fg(DEFAULT_THEME.frontier),
    )));
    if let Some(edge) = &snapshot.edge {
        let (label, style) = edge_label(edge.class);
        lines.push(Line::from(Span::styled(
            format!("edge {}-{}: {}", edge.from, edge.to, label),
            style,
        )));
    }
    if snapshot.cycle_found {
        lines.push(Line::from(Span::styled(
            "cycle detected",
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }
    lines.push(Line::from(""));

    let uses_distances = snapshot.distances.iter().any(Option::is_some);
    for node in 0..snapshot.distances.len() {
        let visited_at = snapshot.visited.iter().position(|&v| v == node);
        let in_frontier = snapshot.frontier.contains(&node);
        let is_current = snapshot.current == Some(node);

        let mut text = format!("node {:2}", node);
        if uses_distances {
            match snapshot.distances[node] {
                Some(d) => text.push_str(&format!("  dist {}", d)),
                None => text.push_str("  dist ?"),
            }
        } else {
            match (snapshot.discovery[node], snapshot.finish[node]) {
                (Some(d), Some(f)) => text.push_str(&format!("  disc {} / fin {}", d, f)),
                (Some(d), None) => text.push_str(&format!("  disc {} / fin -", d)),
                _ => text.push_str("  disc - / fin -"),
            }
        }
        if let Some(order) = visited_at {
            text.push_str(&format!("  visited #{}", order + 1));
        } else if in_frontier {
            text.push_str("  waiting");
        }

        let style = if is_current {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else if visited_at.is_some() {
            Style::default().fg(DEFAULT_THEME.visited)
        } else if in_frontier {
            Style::default().fg(DEFAULT_THEME.frontier)
        } else {
            dim()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines
}

fn tree_lines(snapshot: &TreeSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !snapshot.path.is_empty() {
        let path: Vec<String> = snapshot.path.iter().map(|k| k.to_string()).collect();
        lines.push(Line::from(Span::styled(
            format!("path: {}", path.join(" > ")),
            Style::default().fg(DEFAULT_THEME.frontier),
        )));
        lines.push(Line::from(""));
    }
    if snapshot.nodes.is_empty() {
        lines.push(Line::from(Span::styled("(empty tree)", dim())));
        return lines;
    }

    // Sideways rendering: right subtree above, left below, via an explicit
    // reverse-in-order stack.
    let mut stack: Vec<(usize, usize, bool)> = vec![(0, 0, false)];
    while let Some((idx, depth, expanded)) = stack.pop() {
        if !expanded {
            if let Some(left) = snapshot.nodes[idx].left {
                stack.push((left, depth + 1, false));
            }
            stack.push((idx, depth, true));
            if let Some(right) = snapshot.nodes[idx].right {
                stack.push((right, depth + 1, false));
            }
        } else {
            let is_current = snapshot.current == Some(idx);
            let style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if snapshot.path.contains(&snapshot.nodes[idx].key) {
                Style::default().fg(DEFAULT_THEME.visited)
            } else {
                plain()
            };
            let marker = if is_current { " <" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("{}{}{}", "    ".repeat(depth), snapshot.nodes[idx].key, marker),
                style,
            )));
        }
    }
    lines
}

fn table_lines(snapshot: &TableSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = String::from("      ");
    for w in 0..snapshot.cols {
        header.push_str(&format!("{:>4}", w));
    }
    lines.push(Line::from(Span::styled(header, dim())));

    for (i, row) in snapshot.cells.iter().enumerate() {
        let selected = i > 0 && snapshot.selected.contains(&(i - 1));
        let label = if selected {
            format!("{:>4}* ", i)
        } else {
            format!("{:>5} ", i)
        };
        let label_style = if selected {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            dim()
        };

        let mut spans = vec![Span::styled(label, label_style)];
        for (w, cell) in row.iter().enumerate() {
            let text = match cell {
                Some(v) => format!("{:>4}", v),
                None => format!("{:>4}", "."),
            };
            let style = if snapshot.active == Some((i, w)) {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if cell.is_some() {
                plain()
            } else {
                dim()
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    if !snapshot.selected.is_empty() {
        let picks: Vec<String> = snapshot.selected.iter().map(|i| (i + 1).to_string()).collect();
        lines.push(Line::from(Span::styled(
            format!("selected item rows: {}", picks.join(", ")),
            Style::default().fg(DEFAULT_THEME.success),
        )));
    }
    lines
}

fn calls_lines(snapshot: &CallsSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some((a, b)) = snapshot.pair {
        lines.push(Line::from(Span::styled(
            format!("(a, b) = ({}, {})", a, b),
            Style::default().fg(DEFAULT_THEME.number),
        )));
    }
    if let Some((n, value)) = snapshot.returned {
        lines.push(Line::from(Span::styled(
            format!("returned: fib({}) = {}", n, value),
            Style::default().fg(DEFAULT_THEME.success),
        )));
    }

    if !snapshot.frames.is_empty() {
        lines.push(Line::from(Span::styled("call stack:", dim())));
        let deepest = snapshot.frames.len() - 1;
        for (depth, n) in snapshot.frames.iter().enumerate() {
            let style = if depth == deepest {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                plain()
            };
            lines.push(Line::from(Span::styled(
                format!("{}fib({})", "  ".repeat(depth), n),
                style,
            )));
        }
    }

    for (label, cells) in [("memo", &snapshot.memo), ("table", &snapshot.table)] {
        if cells.iter().any(Option::is_some) {
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, cell)| match cell {
                    Some(v) => format!("{}:{}", i, v),
                    None => format!("{}:.", i),
                })
                .collect();
            lines.push(Line::from(Span::styled(
                format!("{}: {}", label, rendered.join(" ")),
                plain(),
            )));
        }
    }
    lines
}
