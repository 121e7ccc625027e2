//! Inference port for the hosted model service.
//!
//! This port defines the interface for issuing a single text-generation
//! call against the upstream model service. It abstracts the transport
//! and account details from the HTTP layer.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL_ID: &str = "meta.llama3-2-90b-instruct-v1:0";

/// Generation-length limit used when the caller does not supply one.
pub const DEFAULT_MAX_GEN_LEN: u32 = 4000;

/// Sampling temperature used when the caller does not supply one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Nucleus-sampling threshold. Fixed; never caller-supplied.
pub const DEFAULT_TOP_P: f32 = 0.9;

/// A fully resolved request for one generation call.
///
/// All optional caller inputs have already been defaulted by the time
/// this struct exists; adapters pass these values through unchanged. No
/// bounds checking happens at this layer. Whatever the upstream service
/// accepts is accepted here.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    /// Model identifier, used as the upstream routing key.
    pub model_id: String,
    /// The caller's prompt text, passed through verbatim.
    pub prompt: String,
    /// Maximum number of tokens to generate.
    pub max_gen_len: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus-sampling threshold.
    pub top_p: f32,
}

impl InferenceRequest {
    /// Create a request with the fixed nucleus-sampling threshold applied.
    #[must_use]
    pub fn new(model_id: String, prompt: String, max_gen_len: u32, temperature: f32) -> Self {
        Self {
            model_id,
            prompt,
            max_gen_len,
            temperature,
            top_p: DEFAULT_TOP_P,
        }
    }
}

/// Errors that can occur during an inference call.
///
/// The HTTP layer collapses every variant into the same generic failure
/// response; this taxonomy exists for logging and tests, not for status
/// mapping.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The remote call itself failed (network, throttling, auth,
    /// guardrail rejection, unknown model). The upstream message is
    /// forwarded verbatim.
    #[error("{0}")]
    Invocation(String),

    /// The response payload was not UTF-8 text or not valid JSON.
    #[error("failed to decode model response: {0}")]
    Decode(String),

    /// The response decoded cleanly but carried no generation text.
    #[error("model response did not contain a generation")]
    MissingGeneration,
}

/// Port for issuing one generation call against the upstream service.
///
/// Implementations perform a single attempt. No retry, no timeout
/// beyond transport defaults, no circuit breaking. The process-wide
/// client behind an implementation is constructed once at bootstrap and
/// shared across requests.
#[async_trait]
pub trait InferencePort: Send + Sync + fmt::Debug {
    /// Invoke the model once and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError` if the call or the payload decoding fails.
    async fn invoke(&self, request: &InferenceRequest) -> Result<String, InferenceError>;
}
