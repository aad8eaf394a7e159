//! Customer form panel: progress, error banner, step fields and buttons

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::state::{WizardButton, WizardStep};
use crate::ui::components::{
    banner_height, render_action_button, render_button, render_error_banner, BUTTON_HEIGHT,
};
use crate::ui::progress;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of a wizard button
const BUTTON_WIDTH: u16 = 16;

/// Draw the form panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Customer Details Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_height = app
        .state
        .error_message
        .as_deref()
        .map(|msg| banner_height(msg, inner.width).min(inner.height / 2))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Subtitle
            Constraint::Length(progress::HEIGHT), // Step markers
            Constraint::Length(error_height),     // Error banner
            Constraint::Min(0),                   // Step content
            Constraint::Length(BUTTON_HEIGHT),    // Buttons
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Please complete all required information",
            Style::default().fg(Color::Gray),
        )),
        chunks[0],
    );

    progress::draw(frame, chunks[1], app.state.active_step);

    if let Some(message) = &app.state.error_message {
        render_error_banner(frame, chunks[2], message);
    }

    draw_step_content(frame, chunks[3], app);
    draw_buttons(frame, chunks[4], app);
}

fn draw_step_content(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.active_step;
    if step == WizardStep::Confirmation {
        draw_confirmation(frame, area, app);
        return;
    }

    let fields = step.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|id| Constraint::Length(field_height(app.state.form.field(*id))))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, id) in fields.iter().enumerate() {
        let is_active = app.state.active_form_field == idx;
        draw_field(frame, chunks[idx], app.state.form.field(*id), is_active);
    }

    if let Some(rest) = chunks.last() {
        let hint = if app.state.is_active_field_multiline() {
            "Enter adds a new line. Tab moves to the next field."
        } else {
            "Enter moves to the next field."
        };
        draw_help_text(frame, *rest, &[hint]);
    }
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let lines = if app.state.response_data.is_some() {
        vec![
            Line::from(Span::styled(
                "✓ Form submitted",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The response is shown in the Response Details panel.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Go back to edit the dates and submit again.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Nothing submitted yet.",
            Style::default().fg(Color::Gray),
        ))]
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = app.state.buttons();
    let row_active = app.state.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    for (idx, button) in buttons.iter().enumerate() {
        let is_selected = row_active && app.state.form_selected_button == idx;
        match button {
            WizardButton::Back => {
                render_button(frame, chunks[0], button.label(), is_selected, true);
            }
            WizardButton::Next => {
                render_action_button(
                    frame,
                    chunks[2],
                    button.label(),
                    is_selected,
                    true,
                    Some(Color::Blue),
                );
            }
            WizardButton::Submit => {
                let label = if app.state.is_loading {
                    "Processing..."
                } else {
                    button.label()
                };
                render_action_button(
                    frame,
                    chunks[2],
                    label,
                    is_selected,
                    app.state.can_submit(),
                    Some(Color::Green),
                );
            }
        }
    }
}
