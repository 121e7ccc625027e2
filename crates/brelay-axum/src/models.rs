//! API data models for request/response handling.
//!
//! Domain types live in `brelay-core`; this module handles the API
//! layer mapping, including default resolution for absent fields.

use brelay_core::ports::{
    DEFAULT_MAX_GEN_LEN, DEFAULT_MODEL_ID, DEFAULT_TEMPERATURE, InferenceRequest,
};
use serde::{Deserialize, Serialize};

/// Request to the /invoke endpoint.
///
/// Every field except the prompt is optional; absent fields take the
/// documented defaults. No bounds checking is performed on any value.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionRequest {
    /// The prompt to complete. Required and non-empty.
    pub prompt: Option<String>,
    /// Model identifier to route to.
    pub model_id: Option<String>,
    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Apply defaults and produce the upstream request.
    ///
    /// Returns `None` when the prompt is missing or empty; the caller
    /// must reject such requests before any upstream call.
    pub fn resolve(self) -> Option<InferenceRequest> {
        let prompt = self.prompt.filter(|p| !p.is_empty())?;

        Some(InferenceRequest::new(
            self.model_id.unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            prompt,
            self.max_tokens.unwrap_or(DEFAULT_MAX_GEN_LEN),
            self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        ))
    }
}

/// Successful response from the /invoke endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResponse {
    /// The generated text extracted from the upstream payload.
    pub completion: String,
    /// The model identifier that served the request.
    pub model: String,
}

/// Error response body. One shape for every failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brelay_core::ports::DEFAULT_TOP_P;

    fn bare(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            prompt: Some(prompt.to_string()),
            model_id: None,
            max_tokens: None,
            temperature: None,
        }
    }

    #[test]
    fn absent_fields_take_defaults() {
        let resolved = bare("hello").resolve().unwrap();

        assert_eq!(resolved.model_id, "meta.llama3-2-90b-instruct-v1:0");
        assert_eq!(resolved.prompt, "hello");
        assert_eq!(resolved.max_gen_len, 4000);
        assert_eq!(resolved.temperature, 0.7);
        assert_eq!(resolved.top_p, DEFAULT_TOP_P);
    }

    #[test]
    fn caller_values_pass_through_unchecked() {
        let request = CompletionRequest {
            prompt: Some("hello".to_string()),
            model_id: Some("custom-model".to_string()),
            max_tokens: Some(1),
            temperature: Some(9.5),
        };
        let resolved = request.resolve().unwrap();

        assert_eq!(resolved.model_id, "custom-model");
        assert_eq!(resolved.max_gen_len, 1);
        // Out-of-range values are the upstream's problem, not ours
        assert_eq!(resolved.temperature, 9.5);
    }

    #[test]
    fn missing_prompt_does_not_resolve() {
        let request = CompletionRequest {
            prompt: None,
            model_id: Some("custom-model".to_string()),
            max_tokens: None,
            temperature: None,
        };
        assert!(request.resolve().is_none());
    }

    #[test]
    fn empty_prompt_does_not_resolve() {
        assert!(bare("").resolve().is_none());
    }
}
