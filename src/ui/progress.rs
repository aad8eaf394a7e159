//! Step progress markers

use crate::state::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Rows used by the progress markers; titles may wrap onto the third
pub const HEIGHT: u16 = 3;

/// Columns given to a step: its title plus a space either side
fn column_width(step: WizardStep) -> u16 {
    u16::try_from(step.title().chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Draw one marker per step; steps up to the active one are highlighted
pub fn draw(frame: &mut Frame, area: Rect, active: WizardStep) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::SpaceAround)
        .constraints(
            WizardStep::ALL
                .iter()
                .map(|step| Constraint::Length(column_width(*step))),
        )
        .split(area);

    for (step, chunk) in WizardStep::ALL.iter().zip(chunks.iter()) {
        let reached = step.index() <= active.index();
        let marker_style = if reached {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };
        let title_style = if *step == active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if reached && *step != active {
            " ✓ ".to_string()
        } else {
            format!(" {} ", step.index() + 1)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(*chunk);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(marker, marker_style)))
                .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(step.title(), title_style)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[1],
        );
    }
}
