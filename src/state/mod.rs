//! Application state module

mod app_state;
mod forms;
mod step;

pub use app_state::*;
pub use forms::*;
pub use step::*;
