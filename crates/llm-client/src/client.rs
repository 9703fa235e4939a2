use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::instrument;

use crate::types::{BackendError, GenerativeBackend, StructuredRequest};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic Messages API backend.
///
/// A failed call is never retried here: a single backend failure aborts the
/// whole prediction request, so transient errors surface to the caller as-is.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            api_key,
            model,
        }
    }

    fn extract_text_content(response_body: &serde_json::Value) -> Result<&str, BackendError> {
        let content_arr = response_body
            .get("content")
            .and_then(|c| c.as_array())
            .ok_or_else(|| BackendError::Schema("Missing or invalid 'content' field".into()))?;

        content_arr
            .iter()
            .find(|item| item["type"] == "text")
            .and_then(|item| item["text"].as_str())
            .ok_or(BackendError::EmptyOutput)
    }

    /// Parses the JSON object out of the model's text reply. The prompt
    /// requests JSON-only, but this remains defensive against occasional
    /// wrappers.
    fn parse_json_payload(text_content: &str) -> Result<serde_json::Value, BackendError> {
        if text_content.trim().is_empty() {
            return Err(BackendError::EmptyOutput);
        }

        let json_start = text_content.find('{').unwrap_or(0);
        let json_end = text_content
            .rfind('}')
            .map(|i| i + 1)
            .unwrap_or(text_content.len());
        let json_str = &text_content[json_start..json_end];

        serde_json::from_str(json_str).map_err(BackendError::Json)
    }
}

#[async_trait]
impl GenerativeBackend for AnthropicClient {
    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> Result<serde_json::Value, BackendError> {
        let payload = json!({
            "model": self.model,
            "max_tokens": 1024,
            "system": request.system_prompt,
            "messages": [
                {
                    "role": "user",
                    "content": request.user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Api(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BackendError::Api(e.to_string()))?;
        let text_content = Self::extract_text_content(&response_body)?;

        Self::parse_json_payload(text_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_text_block() {
        let body = json!({
            "content": [
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "{\"a\": 1}"}
            ]
        });
        assert_eq!(
            AnthropicClient::extract_text_content(&body).unwrap(),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn missing_content_is_schema_error() {
        let body = json!({"id": "msg_1"});
        assert!(matches!(
            AnthropicClient::extract_text_content(&body),
            Err(BackendError::Schema(_))
        ));
    }

    #[test]
    fn content_without_text_is_empty_output() {
        let body = json!({"content": [{"type": "tool_use", "id": "x"}]});
        assert!(matches!(
            AnthropicClient::extract_text_content(&body),
            Err(BackendError::EmptyOutput)
        ));
    }

    #[test]
    fn strips_prose_around_json_object() {
        let value =
            AnthropicClient::parse_json_payload("Here you go:\n{\"a\": 1}\nHope that helps!")
                .unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn blank_reply_is_empty_output() {
        assert!(matches!(
            AnthropicClient::parse_json_payload("   \n"),
            Err(BackendError::EmptyOutput)
        ));
    }

    #[test]
    fn malformed_reply_is_json_error() {
        assert!(matches!(
            AnthropicClient::parse_json_payload("{not json"),
            Err(BackendError::Json(_))
        ));
    }
}
