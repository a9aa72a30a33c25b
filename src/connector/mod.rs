//! # Connector Layer
//!
//! External integrations:
//! - LLM providers implementing [`crate::application::ChatClient`]
//! - The HTTP API (axum) and the container wiring everything together

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
