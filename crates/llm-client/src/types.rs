use async_trait::async_trait;
use uuid::Uuid;

/// One schema-directed generation request.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Correlation id carried through log spans; two pipeline stages of the
    /// same prediction share one id.
    pub request_id: Uuid,
    pub system_prompt: String,
    pub user_prompt: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("API request failed: {0}")]
    Api(String),
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Timeout")]
    Timeout,
    #[error("Backend returned no structured output")]
    EmptyOutput,
    #[error("Schema validation failed: {0}")]
    Schema(String),
}

/// The reasoning capability the pipeline depends on: given a rendered prompt
/// and a declared output schema, return a conforming JSON value or signal the
/// absence of usable output.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> Result<serde_json::Value, BackendError>;
}
