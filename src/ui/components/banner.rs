//! Inline error banner

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the banner for a message at the given width
pub fn banner_height(message: &str, width: u16) -> u16 {
    // Borders plus the "⚠ " prefix
    let inner = width.saturating_sub(4).max(1) as usize;
    let lines: usize = message
        .lines()
        .map(|line| line.chars().count().div_ceil(inner).max(1))
        .sum();
    u16::try_from(lines.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Render an error message in a red box
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let content = Line::from(vec![
        Span::styled(
            "⚠ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(Color::LightRed)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
