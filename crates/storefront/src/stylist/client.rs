//! Claude API client for single-turn text completions.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::StylistConfig;

use super::error::{ApiErrorResponse, StylistError};
use super::types::{Message, MessagesRequest, MessagesResponse};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 512;

/// Claude Messages API client.
///
/// Sends one user message and returns the text of the reply. The
/// never-throws contract lives a level up in [`Stylist`](super::Stylist);
/// this client reports real errors.
#[derive(Clone)]
pub struct StylistClient {
    client: reqwest::Client,
    model: String,
}

impl StylistClient {
    /// Create a new client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &StylistConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            model: config.model.clone(),
        }
    }

    /// Send `prompt` as a single user message and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response cannot be parsed.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn complete(&self, prompt: &str) -> Result<String, StylistError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![Message::user(prompt)],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status, &body));
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| StylistError::Parse(format!("Failed to parse response: {e}")))?;
        Ok(parsed.text())
    }
}

/// Map an error body to a `StylistError`, falling back to the raw status.
fn parse_api_error(status: reqwest::StatusCode, body: &str) -> StylistError {
    serde_json::from_str::<ApiErrorResponse>(body).map_or_else(
        |_| StylistError::Api {
            error_type: status.to_string(),
            message: body.chars().take(200).collect(),
        },
        |parsed| StylistError::Api {
            error_type: parsed.error.error_type,
            message: parsed.error.message,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = parse_api_error(reqwest::StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        let StylistError::Api { error_type, .. } = err else {
            panic!("expected api error");
        };
        assert!(error_type.contains("502"));
    }

    #[test]
    fn structured_error_body_is_parsed() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"busy"}}"#;
        let err = parse_api_error(reqwest::StatusCode::SERVICE_UNAVAILABLE, body);
        let StylistError::Api {
            error_type,
            message,
        } = err
        else {
            panic!("expected api error");
        };
        assert_eq!(error_type, "overloaded_error");
        assert_eq!(message, "busy");
    }
}
