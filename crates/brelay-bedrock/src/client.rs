//! Bedrock runtime client wrapping the inference port.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::debug;

use brelay_core::ports::{InferenceError, InferencePort, InferenceRequest};

use crate::payload::{ModelInput, extract_generation};

/// Inference port implementation backed by the Bedrock runtime API.
///
/// Constructed once at bootstrap and shared across all requests.
/// Credentials are ambient: the SDK's default provider chain resolves
/// them from the environment, profile, or instance metadata.
#[derive(Debug)]
pub struct BedrockInference {
    client: Client,
    prompt_arn: String,
    guardrail_arn: String,
}

impl BedrockInference {
    /// Build a region-scoped client with the fixed upstream references.
    pub async fn connect(region: &str, prompt_arn: String, guardrail_arn: String) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            prompt_arn,
            guardrail_arn,
        }
    }
}

#[async_trait]
impl InferencePort for BedrockInference {
    async fn invoke(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        let input = ModelInput::new(request, &self.prompt_arn, &self.guardrail_arn);
        let body =
            serde_json::to_vec(&input).map_err(|e| InferenceError::Invocation(e.to_string()))?;

        debug!(model_id = %request.model_id, "invoking bedrock model");

        let output = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| InferenceError::Invocation(DisplayErrorContext(&e).to_string()))?;

        extract_generation(output.body().as_ref())
    }
}
