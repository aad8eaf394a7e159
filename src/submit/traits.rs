//! Trait abstraction for the submission client to enable mocking in tests

use async_trait::async_trait;

use super::error::SubmitError;
use super::payload::{CustomerPayload, ResponseData};

/// Trait for posting the form, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// Post the payload and return the parsed response mapping
    async fn submit(&self, payload: &CustomerPayload) -> Result<ResponseData, SubmitError>;
}
