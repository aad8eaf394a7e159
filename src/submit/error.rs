//! Submission errors

use serde_json::Value;
use thiserror::Error;

/// Message shown whenever no usable response came back
pub const GENERIC_FAILURE: &str = "Failed to submit the form. Please try again.";

/// Errors that can occur while submitting the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No response was received (connection refused, DNS, body read failure)
    #[error("{}", GENERIC_FAILURE)]
    Network(String),

    /// A success status whose body is not a JSON object
    #[error("{}", GENERIC_FAILURE)]
    MalformedResponse(String),

    /// The endpoint answered with a non-success status
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Vec<String> },
}

impl SubmitError {
    /// Build a status error from a raw error body.
    ///
    /// Understands `{"detail": [{"msg": ...}, ...]}` as well as a plain
    /// `{"detail": "..."}`; anything else leaves the detail list empty.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<Value>(body)
            .ok()
            .map(|value| detail_messages(&value))
            .unwrap_or_default();
        SubmitError::Status { status, detail }
    }

    /// Short description of the underlying cause for logging
    pub fn cause(&self) -> String {
        match self {
            SubmitError::Network(cause) | SubmitError::MalformedResponse(cause) => cause.clone(),
            SubmitError::Status { status, detail } => {
                format!("status {status}, {} detail message(s)", detail.len())
            }
        }
    }
}

fn status_message(status: &u16, detail: &[String]) -> String {
    if detail.is_empty() {
        format!("Error: request failed with status {status}")
    } else {
        format!("Error: {}", detail.join(", "))
    }
}

fn detail_messages(body: &Value) -> Vec<String> {
    match body.get("detail") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item.get("msg") {
                Some(Value::String(msg)) => Some(msg.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(msg)) if !msg.is_empty() => vec![msg.clone()],
        _ => Vec::new(),
    }
}
