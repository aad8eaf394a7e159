//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `step_form`: The wizard panel for the current step

mod field_renderer;
mod step_form;

pub use step_form::draw as draw_step_form;
