//! Opaque generative-reasoning backend for the prediction pipeline.
//!
//! The pipeline only depends on the [`GenerativeBackend`] capability: render a
//! prompt, get back a JSON value conforming to a declared schema, or a typed
//! failure. [`AnthropicClient`] is the production implementation; tests supply
//! deterministic doubles.

mod client;
mod types;

pub use client::AnthropicClient;
pub use types::{BackendError, GenerativeBackend, StructuredRequest};

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Invokes the backend with a schema-directed instruction and deserializes the
/// structured output into `T`.
///
/// The JSON schema for `T` is rendered into the system instruction so the
/// backend knows the exact shape it must emit. Output that parses as JSON but
/// does not match the schema is rejected as [`BackendError::Schema`].
pub async fn generate_as<T, B>(
    backend: &B,
    persona: &str,
    user_prompt: String,
    request_id: Uuid,
) -> Result<T, BackendError>
where
    T: DeserializeOwned + JsonSchema,
    B: GenerativeBackend + ?Sized,
{
    let schema = schemars::schema_for!(T);
    let schema_json = serde_json::to_string_pretty(&schema)?;

    let system_prompt = format!(
        r#"{persona}

You must output strictly valid JSON conforming to the schema below.
Do NOT output any markdown blocks or conversational text. JUST the JSON object.

JSON Schema:
{schema_json}
"#
    );

    let value = backend
        .generate_structured(StructuredRequest {
            request_id,
            system_prompt,
            user_prompt,
        })
        .await?;

    serde_json::from_value(value).map_err(|e| BackendError::Schema(e.to_string()))
}
