//! Response details panel

use crate::app::App;
use crate::submit::{display_value, ResponseData};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder shown until a submission succeeds
pub const PLACEHOLDER: &str = "Complete the form to see the response details here";

/// Draw the response panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Response Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.state.response_data {
        Some(data) => draw_entries(frame, inner, data),
        None => draw_placeholder(frame, inner),
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "⚠",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::Gray))),
    ];
    let height = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

/// Rows needed to show `text` wrapped at `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}

fn draw_entries(frame: &mut Frame, area: Rect, data: &ResponseData) {
    if data.is_empty() {
        frame.render_widget(
            Paragraph::new("The endpoint returned no fields.")
                .style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    }

    let mut y = area.y;
    let bottom = area.bottom();
    let inner_width = area.width.saturating_sub(2);

    for (shown, (key, value)) in data.iter().enumerate() {
        let text = display_value(value);
        let height = wrapped_rows(&text, inner_width).saturating_add(2);

        // Keep one row free for the overflow note
        let remaining = bottom.saturating_sub(y);
        let needed = if shown + 1 < data.len() {
            height.saturating_add(1)
        } else {
            height
        };
        if needed > remaining && shown > 0 {
            let hidden = data.len() - shown;
            if remaining > 0 {
                frame.render_widget(
                    Paragraph::new(format!("… {hidden} more field(s)"))
                        .style(Style::default().fg(Color::DarkGray)),
                    Rect::new(area.x, y, area.width, 1),
                );
            }
            return;
        }

        // The first entry is always shown, clipped to the panel
        let height = height.min(remaining);
        if height == 0 {
            return;
        }

        let entry_area = Rect::new(area.x, y, area.width, height);
        let block = Block::default()
            .title(Span::styled(
                format!(" {key} "),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false })
                .block(block),
            entry_area,
        );
        y = y.saturating_add(height);
    }
}
