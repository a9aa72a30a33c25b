//! # Application Layer
//!
//! The model gateway (retries, error classification, JSON cleanup) and the
//! minutes use case that drives it, plus the traits connectors implement.

pub mod gateway;
pub mod interfaces;
pub mod use_cases;

pub use gateway::*;
pub use interfaces::*;
pub use use_cases::*;
