//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; `accent` colors the label when not focused
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if let Some(color) = accent {
        Style::default().fg(color)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
