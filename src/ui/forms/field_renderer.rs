//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, including borders and the date preview line
pub fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Text => 3,
        FieldKind::Multiline => 5,
        FieldKind::Date => 4,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let (input_area, preview_area) = if field.kind == FieldKind::Date {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        value.split('\n').map(|l| Line::from(l.to_string())).collect()
    };

    if is_active {
        if value.is_empty() {
            lines[0].spans.insert(0, Span::styled(cursor, cursor_style));
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
    }

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .style(text_style)
            .wrap(Wrap { trim: false })
            .block(block),
        input_area,
    );

    if let (Some(preview_rect), Some(preview)) = (preview_area, field.date_preview()) {
        let color = if preview.starts_with("Selected") {
            Color::Gray
        } else {
            Color::Yellow
        };
        frame.render_widget(
            Paragraph::new(format!("  {preview}")).style(Style::default().fg(color)),
            preview_rect,
        );
    }
}

/// Draw help text lines under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let help: Vec<Line> = lines
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(help).wrap(Wrap { trim: true }), area);
}
