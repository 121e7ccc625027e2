//! Port definitions for brelay.
//!
//! Ports are the trait seams implemented by adapter crates. The only
//! port this service needs is the inference port.

pub mod inference;

pub use inference::{
    DEFAULT_MAX_GEN_LEN, DEFAULT_MODEL_ID, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, InferenceError,
    InferencePort, InferenceRequest,
};
