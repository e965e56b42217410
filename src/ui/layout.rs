//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKey, FormStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Key hints for whatever currently has focus
pub fn get_focus_hints(focused: Option<FieldKey>) -> String {
    let field_hint = match focused {
        Some(FieldKey::PhoneType) => "←/→/Space: choose",
        Some(FieldKey::Staff) => "←/→/Space: select role",
        Some(FieldKey::EmailNotifications) => "Space: toggle",
        Some(FieldKey::Bio) => "Enter: new line",
        _ => "Enter: submit",
    };
    format!(" Tab/S-Tab: move | {field_hint} | {SUBMIT_SHORTCUT}: submit | {COPY_SHORTCUT}: copy | Esc: quit")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Form status indicator
    let indicator = match app.state.status {
        FormStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        FormStatus::ErrorsShown => Span::styled(" ● ", Style::default().fg(Color::Red)),
        FormStatus::Submitted => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    let mut spans = vec![indicator];

    spans.push(Span::styled(
        get_focus_hints(app.state.focused_field()),
        Style::default().fg(Color::White),
    ));

    if let Some(msg) = &app.status_message {
        let color = match app.state.status {
            FormStatus::ErrorsShown => Color::Red,
            _ => Color::Green,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(create_layout(area), Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(Some(FieldKey::Bio)).contains("Enter: new line"));
        assert!(get_focus_hints(Some(FieldKey::EmailNotifications)).contains("Space: toggle"));
        assert!(get_focus_hints(Some(FieldKey::Name)).contains("Enter: submit"));
        assert!(get_focus_hints(None).contains(SUBMIT_SHORTCUT));
    }
}
