//! Layout components (panels, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::WizardStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form (left) and response (right) panels
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission status
    let indicator = if app.state.is_loading {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if app.state.error_message.is_some() {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        step_hints(app),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("→ {}", app.endpoint),
        Style::default().fg(Color::Blue),
    ));

    let quit_hint = " ^Q:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_width = (quit_hint.len() as u16).min(status_area.width);
    let quit_area = Rect {
        x: status_area.right().saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current step
fn step_hints(app: &App) -> String {
    let mut hints = vec!["Tab:next field".to_string()];
    if app.state.can_go_back() {
        hints.push(format!("{BACK_SHORTCUT}:back"));
    }
    match app.state.active_step {
        WizardStep::PersonalInfo | WizardStep::FinancialDetails => {
            hints.push(format!("{NEXT_SHORTCUT}:next"));
        }
        WizardStep::Dates => hints.push(format!("{SUBMIT_SHORTCUT}:submit")),
        WizardStep::Confirmation => {}
    }
    if app.state.error_message.is_some() {
        hints.push("Esc:dismiss".to_string());
    }
    hints.join("  ")
}
