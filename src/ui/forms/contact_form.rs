//! Contact form rendering

use super::field_renderer::{
    draw_checkbox, draw_field_error, draw_radio_field, draw_select_field, draw_text_field,
};
use crate::app::App;
use crate::state::{FieldKey, StaffRole};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the whole contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Name + error
            Constraint::Length(4),             // Email + error
            Constraint::Length(4),             // Phone | Phone Type + errors
            Constraint::Length(3),             // Staff | Notifications
            Constraint::Length(7),             // Bio + error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_text_with_error(frame, rows[0], app, FieldKey::Name, None);
    draw_text_with_error(frame, rows[1], app, FieldKey::Email, None);

    let phone_cols = split_columns(rows[2]);
    draw_text_with_error(frame, phone_cols[0], app, FieldKey::Phone, Some("XXX-XXX-XXXX"));
    draw_phone_type(frame, phone_cols[1], app);

    let choice_cols = split_columns(rows[3]);
    draw_staff(frame, choice_cols[0], app);
    draw_checkbox(
        frame,
        choice_cols[1],
        FieldKey::EmailNotifications.label(),
        app.state.form.email_notifications,
        is_focused(app, FieldKey::EmailNotifications),
    );

    draw_text_with_error(frame, rows[4], app, FieldKey::Bio, None);

    let submit_area = Rect {
        width: rows[5].width.min(16),
        ..rows[5]
    };
    render_button(
        frame,
        submit_area,
        "Submit",
        app.state.is_submit_row_active(),
        Some(Color::Green),
    );
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// Split a field slot into the input and the error row beneath it
fn field_and_error(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn is_focused(app: &App, key: FieldKey) -> bool {
    app.state.focused_field() == Some(key)
}

fn draw_text_with_error(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    key: FieldKey,
    placeholder: Option<&str>,
) {
    let (input_area, error_area) = field_and_error(area);
    let value = app.state.form.text(key).unwrap_or_default();
    let label = bio_aware_label(app, key);

    draw_text_field(
        frame,
        input_area,
        &label,
        value,
        placeholder,
        is_focused(app, key),
        key.is_multiline(),
    );
    draw_field_error(frame, error_area, app.field_error(key));
}

/// Field label, with the remaining character count for the bio
fn bio_aware_label(app: &App, key: FieldKey) -> String {
    match key {
        FieldKey::Bio => format!(
            "Bio: ({} characters remaining)",
            app.state.form.bio_chars_remaining()
        ),
        other => other.label().to_string(),
    }
}

fn draw_phone_type(frame: &mut Frame, area: Rect, app: &App) {
    let (input_area, error_area) = field_and_error(area);
    draw_select_field(
        frame,
        input_area,
        FieldKey::PhoneType.label(),
        app.state.form.phone_type.display_label(),
        is_focused(app, FieldKey::PhoneType),
    );
    draw_field_error(frame, error_area, app.field_error(FieldKey::PhoneType));
}

fn draw_staff(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.form.staff;
    let options: Vec<(&str, bool)> = StaffRole::CHOICES
        .iter()
        .map(|role| (role.as_str(), *role == current))
        .collect();
    draw_radio_field(
        frame,
        area,
        FieldKey::Staff.label(),
        &options,
        is_focused(app, FieldKey::Staff),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::sink::MockSubmissionSink;
    use crate::state::{ContactForm, PhoneType};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, app)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|r| r.contains(needle))
    }

    fn new_app() -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_accept().returning(|_| Ok(()));
        App::new(&FormConfig::default(), Box::new(sink))
    }

    #[test]
    fn test_renders_labels_and_placeholders() {
        let rows = render(&new_app());
        assert!(screen_contains(&rows, "Name: *"));
        assert!(screen_contains(&rows, "Email: *"));
        assert!(screen_contains(&rows, "XXX-XXX-XXXX"));
        assert!(screen_contains(&rows, "Select a type"));
        assert!(screen_contains(&rows, "( ) Instructor"));
        assert!(screen_contains(&rows, "[ ] Sign up for email notifications"));
        assert!(screen_contains(&rows, "Bio: (280 characters remaining)"));
        assert!(screen_contains(&rows, "Submit"));
    }

    #[test]
    fn test_renders_validation_errors() {
        let mut app = new_app();
        app.state.form.phone = "555".to_string();
        app.submit();

        let rows = render(&app);
        assert!(screen_contains(&rows, "Name is required"));
        assert!(screen_contains(&rows, "Email is required"));
        assert!(screen_contains(&rows, "Phone number must be in format"));
        assert!(screen_contains(&rows, "Please select a phone type"));
    }

    #[test]
    fn test_renders_values() {
        let mut app = new_app();
        app.state.form = ContactForm {
            name: "Jo".to_string(),
            phone_type: PhoneType::Mobile,
            staff: StaffRole::Student,
            bio: "hello".to_string(),
            email_notifications: true,
            ..ContactForm::default()
        };

        let rows = render(&app);
        assert!(screen_contains(&rows, "Jo"));
        assert!(screen_contains(&rows, "< Mobile >"));
        assert!(screen_contains(&rows, "(•) Student"));
        assert!(screen_contains(&rows, "[x] Sign up"));
        assert!(screen_contains(&rows, "Bio: (275 characters remaining)"));
    }

    #[test]
    fn test_long_bio_scrolls_to_last_line() {
        let mut app = new_app();
        app.state.active_form_field = FieldKey::ALL
            .iter()
            .position(|k| *k == FieldKey::Bio)
            .unwrap();
        for c in "alpha\nbravo\ncharlie\ndelta\necho\nfoxtrot".chars() {
            app.state.form_input_char(c);
        }

        let rows = render(&app);
        assert!(screen_contains(&rows, "foxtrot▌"));
        assert!(!screen_contains(&rows, "alpha"));
    }

    #[test]
    fn test_short_bio_is_not_scrolled() {
        let mut app = new_app();
        app.state.form.bio = "alpha\nbravo".to_string();

        let rows = render(&app);
        assert!(screen_contains(&rows, "alpha"));
        assert!(screen_contains(&rows, "bravo"));
    }
}
