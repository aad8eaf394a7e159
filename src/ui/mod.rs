//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod progress;
mod response_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, response_area) = layout::create_layout(frame.area());

    forms::draw_step_form(frame, form_area, app);
    response_panel::draw(frame, response_area, app);

    layout::draw_status_bar(frame, app);
}
