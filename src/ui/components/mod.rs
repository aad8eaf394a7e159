//! Reusable UI components

mod banner;
mod button;

pub use banner::{banner_height, render_error_banner};
pub use button::{render_action_button, render_button, BUTTON_HEIGHT};
