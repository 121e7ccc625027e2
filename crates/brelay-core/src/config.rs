//! Environment-sourced process configuration.
//!
//! Everything here is resolved once at startup. The two upstream ARNs
//! are account-fixed routing identifiers, not caller input; they default
//! to the values the service ships with and can be overridden per
//! deployment.

use std::env;
use thiserror::Error;

/// Listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 80;

/// Upstream region when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Pre-registered prompt template the upstream wraps every call with.
pub const DEFAULT_PROMPT_ARN: &str = "arn:aws:bedrock:us-west-2:381492005022:prompt/4NLYS6J1L0";

/// Content-safety guardrail applied by the upstream to every call.
pub const DEFAULT_GUARDRAIL_ARN: &str =
    "arn:aws:bedrock:us-west-2:381492005022:guardrail/k6tcx8eogg3w";

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable that must be a port number was not one.
    #[error("{name} is not a valid port number: {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Region the upstream client is scoped to.
    pub region: String,
    /// Prompt-template reference sent with every upstream call.
    pub prompt_arn: String,
    /// Content-safety guardrail reference sent with every upstream call.
    pub guardrail_arn: String,
}

impl RelayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an injected variable lookup.
    ///
    /// Tests use this to avoid mutating process-wide environment state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` resolves to a non-numeric value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            prompt_arn: lookup("BRELAY_PROMPT_ARN")
                .unwrap_or_else(|| DEFAULT_PROMPT_ARN.to_string()),
            guardrail_arn: lookup("BRELAY_GUARDRAIL_ARN")
                .unwrap_or_else(|| DEFAULT_GUARDRAIL_ARN.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RelayConfig::from_lookup(empty).unwrap();

        assert_eq!(config.port, 80);
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.prompt_arn, DEFAULT_PROMPT_ARN);
        assert_eq!(config.guardrail_arn, DEFAULT_GUARDRAIL_ARN);
    }

    #[test]
    fn overrides_are_honored() {
        let config = RelayConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "AWS_REGION" => Some("eu-central-1".to_string()),
            "BRELAY_PROMPT_ARN" => Some("arn:aws:bedrock:eu-central-1:1:prompt/x".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.prompt_arn, "arn:aws:bedrock:eu-central-1:1:prompt/x");
        // Unset variables still fall back
        assert_eq!(config.guardrail_arn, DEFAULT_GUARDRAIL_ARN);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = RelayConfig::from_lookup(|key| {
            (key == "PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort { name: "PORT", .. }));
    }
}
