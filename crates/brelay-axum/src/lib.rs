//! Axum HTTP adapter for brelay.
//!
//! Exposes two routes: `POST /invoke` for completions and `GET /health`
//! for liveness. The inference port is injected through router state;
//! this crate never constructs AWS clients outside of `bootstrap`.

pub mod bootstrap;
pub mod models;
pub mod server;

// Re-export primary types
pub use bootstrap::bootstrap;
pub use server::{AppState, create_router, serve};
