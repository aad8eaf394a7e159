//! Submission client module for HTTP communication

mod client;
mod error;
mod payload;
mod traits;

pub use client::{TranslateClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use payload::{display_value, CustomerPayload, ResponseData};
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use error::GENERIC_FAILURE;
#[cfg(test)]
pub use traits::MockSubmitClientTrait;
