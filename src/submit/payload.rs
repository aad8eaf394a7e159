//! Request and response bodies for the translate endpoint

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::SubmitError;

/// Response body as an ordered string-keyed mapping
pub type ResponseData = Map<String, Value>;

/// The fixed-shape object posted to the endpoint.
///
/// Field order is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerPayload {
    #[serde(rename = "Customer Full Name")]
    pub full_name: String,
    #[serde(rename = "Customer Address")]
    pub address: String,
    #[serde(rename = "Close out amount in words")]
    pub close_out_amount: String,
    #[serde(rename = "Record initiating date")]
    pub record_date: String,
    #[serde(rename = "Loan outstanding amount in words")]
    pub loan_amount: String,
    #[serde(rename = "Next working date of record initiating date")]
    pub next_date: String,
    #[serde(rename = "Record Confirming Legal officer Name")]
    pub legal_officer: String,
}

/// Parse a success body, which must be a JSON object
pub fn parse_response(body: &[u8]) -> Result<ResponseData, SubmitError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(SubmitError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(SubmitError::MalformedResponse(e.to_string())),
    }
}

/// Text shown for a response value: strings verbatim, everything else as JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
