//! AWS Bedrock runtime adapter for brelay.
//!
//! Implements the inference port with `aws-sdk-bedrockruntime`. This
//! crate owns the upstream payload shape and the response decoding; the
//! HTTP layer never sees AWS types.

mod client;
mod payload;

pub use client::BedrockInference;
