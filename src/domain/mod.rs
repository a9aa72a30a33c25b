//! # Domain Layer
//!
//! Meeting-minutes value types, the completion request/response shapes and
//! the error taxonomy. This layer is independent of HTTP and LLM providers.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
