//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete Bedrock client is
//! constructed. The client is built once and shared across all requests
//! through the router state.

use std::sync::Arc;

use anyhow::Result;
use brelay_bedrock::BedrockInference;
use brelay_core::RelayConfig;

use crate::server::AppState;

/// Bootstrap the relay with a process-wide inference client.
pub async fn bootstrap(config: &RelayConfig) -> Result<AppState> {
    tracing::info!(
        region = %config.region,
        prompt_arn = %config.prompt_arn,
        guardrail_arn = %config.guardrail_arn,
        "Bootstrap resolved upstream configuration"
    );

    let inference = BedrockInference::connect(
        &config.region,
        config.prompt_arn.clone(),
        config.guardrail_arn.clone(),
    )
    .await;

    Ok(AppState {
        inference: Arc::new(inference),
    })
}
