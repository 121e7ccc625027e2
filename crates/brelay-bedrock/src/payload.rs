//! Upstream payload construction and response decoding.
//!
//! The Bedrock invoke-model body carries the caller's prompt plus two
//! account-fixed references (prompt template and guardrail) alongside
//! the generation parameters. The response body is opaque bytes that
//! must decode as UTF-8 JSON with a `generation` field.

use brelay_core::ports::{InferenceError, InferenceRequest};
use serde::Serialize;

/// JSON body sent to the Bedrock invoke-model API.
#[derive(Debug, Serialize)]
pub(crate) struct ModelInput<'a> {
    #[serde(rename = "promptArn")]
    pub prompt_arn: &'a str,
    #[serde(rename = "guardrailArn")]
    pub guardrail_arn: &'a str,
    pub prompt: &'a str,
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl<'a> ModelInput<'a> {
    pub(crate) fn new(
        request: &'a InferenceRequest,
        prompt_arn: &'a str,
        guardrail_arn: &'a str,
    ) -> Self {
        Self {
            prompt_arn,
            guardrail_arn,
            prompt: &request.prompt,
            max_gen_len: request.max_gen_len,
            temperature: request.temperature,
            top_p: request.top_p,
        }
    }
}

/// Decode the raw response payload and extract the generated text.
pub(crate) fn extract_generation(raw: &[u8]) -> Result<String, InferenceError> {
    let text = std::str::from_utf8(raw).map_err(|e| InferenceError::Decode(e.to_string()))?;
    let body: serde_json::Value =
        serde_json::from_str(text).map_err(|e| InferenceError::Decode(e.to_string()))?;

    body.get("generation")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or(InferenceError::MissingGeneration)
}
