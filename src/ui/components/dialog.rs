//! Modal error dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Widest the dialog may grow, borders included
const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(error_message.lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]));

    // 2 for borders, 4 for side padding
    let longest = error_message
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max("Press Enter or Esc to dismiss".len()) as u16;
    let width = (longest + 6).min(MAX_WIDTH);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let wrapped_rows: usize = error_message
        .lines()
        .map(|l| l.chars().count().div_ceil(text_width).max(1))
        .sum();
    let height = (wrapped_rows as u16 + 6).max(5);

    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 20, 4);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(5, 5, 20, 4));
    }

    #[test]
    fn test_renders_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, "Failed to submit form: disk full"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect();
        assert!(rows.iter().any(|r| r.contains("Failed to submit form: disk full")));
        assert!(rows.iter().any(|r| r.contains("to dismiss")));
    }
}
