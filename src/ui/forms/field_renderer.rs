//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn bordered(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw a text input; `placeholder` shows while the value is empty
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    is_active: bool,
    is_multiline: bool,
) {
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if value.is_empty() {
        let hint = placeholder.unwrap_or("");
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]))
    } else if is_multiline {
        // split('\n') rather than lines() so a trailing newline keeps its row
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, text_style), cursor]))
    };

    let content = content.wrap(Wrap { trim: false });
    let block = bordered(label, is_active);
    let inner = block.inner(area);
    // Keep the last wrapped row, where the cursor sits, in view
    let overflow = content
        .line_count(inner.width)
        .saturating_sub(usize::from(inner.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

    frame.render_widget(content.scroll((scroll, 0)).block(block), area);
}

/// Draw a select as `< value >`
pub fn draw_select_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("< ", arrow_style),
        Span::raw(value.to_string()),
        Span::styled(" >", arrow_style),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(bordered(label, is_active)),
        area,
    );
}

/// Draw a radio group; `options` pairs each label with whether it is chosen
pub fn draw_radio_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    is_active: bool,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (option, checked) in options {
        let (mark, style) = if *checked {
            (
                "(•) ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( ) ", Style::default())
        };
        spans.push(Span::styled(format!("{mark}{option}"), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(bordered(label, is_active)),
        area,
    );
}

/// Draw a single checkbox with its label inside the border
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active));
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{mark}{label}"), style)).block(block),
        area,
    );
}

/// Draw a validation message in the row beneath a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
