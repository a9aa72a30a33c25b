pub mod container;
pub mod controller;
pub mod dto;
pub mod error;
pub mod router;
pub mod validation;

pub use container::{Container, ContainerConfig, Provider, APP_NAME, APP_VERSION};
pub use dto::{ErrorResponse, GenerateMinutesRequest, HealthResponse, MinutesWithMetadata};
pub use error::ApiError;
pub use router::router;
pub use validation::{validate_raw_notes, DEFAULT_MAX_NOTES_LENGTH, MIN_NOTES_LENGTH};
