//! HTTP client for the translate endpoint
//!
//! Posts the customer payload as JSON and maps the outcome onto
//! [`SubmitError`] for display.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::SubmitError;
use super::payload::{parse_response, CustomerPayload, ResponseData};
use super::traits::SubmitClientTrait;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/translate";

/// Client for posting the form to the translate endpoint
pub struct TranslateClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TranslateClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for TranslateClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl SubmitClientTrait for TranslateClient {
    async fn submit(&self, payload: &CustomerPayload) -> Result<ResponseData, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("POST {} failed: {e}", self.endpoint);
                SubmitError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Network(format!("failed to read response body: {e}")))?;
        debug!("POST {} -> {status} ({} bytes)", self.endpoint, body.len());

        if status.is_success() {
            parse_response(&body)
        } else {
            Err(SubmitError::from_error_body(status.as_u16(), &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_payload() -> CustomerPayload {
        CustomerPayload {
            full_name: "Jane Perera".to_string(),
            address: "12 Galle Road".to_string(),
            close_out_amount: "Ten thousand".to_string(),
            record_date: "3rd January 2024".to_string(),
            loan_amount: "Five thousand".to_string(),
            next_date: "4th January 2024".to_string(),
            legal_officer: "A. Silva".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> TranslateClient {
        TranslateClient::new(format!("{}/translate", server.uri()))
    }

    #[test]
    fn test_default_endpoint() {
        let client = TranslateClient::default();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_success_returns_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "Customer Full Name": "Jane Perera",
                "Customer Address": "12 Galle Road",
                "Close out amount in words": "Ten thousand",
                "Record initiating date": "3rd January 2024",
                "Loan outstanding amount in words": "Five thousand",
                "Next working date of record initiating date": "4th January 2024",
                "Record Confirming Legal officer Name": "A. Silva",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"a": "b"})))
            .expect(1)
            .mount(&server)
            .await;

        let data = client_for(&server).submit(&sample_payload()).await.unwrap();
        assert_eq!(data.get("a"), Some(&json!("b")));
        assert_eq!(data.len(), 1);
    }

    #[tokio::test]
    async fn test_validation_error_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"detail": [{"msg": "required"}]})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit(&sample_payload())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Status {
                status: 422,
                detail: vec!["required".to_string()]
            }
        );
        assert!(err.to_string().contains("required"));
    }

    #[tokio::test]
    async fn test_server_error_without_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit(&sample_payload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: request failed with status 500");
    }

    #[tokio::test]
    async fn test_success_with_non_object_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit(&sample_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = TranslateClient::new(format!("http://127.0.0.1:{port}/translate"));

        let err = client.submit(&sample_payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Network(_)));
        assert_eq!(err.to_string(), crate::submit::GENERIC_FAILURE);
    }
}
