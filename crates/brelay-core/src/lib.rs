//! Core domain types for brelay.
//!
//! This crate holds everything the adapters share: the inference port
//! (the seam between the HTTP layer and the hosted model service), the
//! generation parameter defaults, and the environment-sourced process
//! configuration. No HTTP and no AWS types live here.

pub mod config;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{ConfigError, RelayConfig};
pub use ports::{
    DEFAULT_MAX_GEN_LEN, DEFAULT_MODEL_ID, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, InferenceError,
    InferencePort, InferenceRequest,
};
