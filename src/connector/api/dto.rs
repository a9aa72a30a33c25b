use serde::{Deserialize, Serialize};

use crate::domain::MeetingMinutes;

fn default_language() -> String {
    "en".to_string()
}

/// Body of `POST /generate-minutes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMinutesRequest {
    /// Raw meeting notes or transcript (50-50000 characters)
    pub raw_notes: String,

    /// ISO language code of the notes
    #[serde(default = "default_language")]
    pub language: String,
}

/// Response body. Serialize only: the wrapped minutes are built through
/// their constructors, never decoded.
#[derive(Debug, Clone, Serialize)]
pub struct MinutesWithMetadata {
    pub minutes: MeetingMinutes,
    pub processing_time_ms: f64,
    pub model_used: String,
    pub input_character_count: usize,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
