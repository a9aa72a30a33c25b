use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::ModelGateway;
use crate::domain::{DomainError, MeetingMinutes};

use super::minutes_coercion::coerce_minutes;
use super::minutes_prompt::{build_minutes_prompt, EXTRACTION_TEMPERATURE, MINUTES_SYSTEM_PROMPT};

/// Converts raw meeting notes into [`MeetingMinutes`] through the model gateway.
pub struct GenerateMinutesUseCase {
    gateway: Arc<ModelGateway>,
}

impl GenerateMinutesUseCase {
    pub fn new(gateway: Arc<ModelGateway>) -> Self {
        Self { gateway }
    }

    pub fn model_name(&self) -> &str {
        self.gateway.model_name()
    }

    pub async fn execute(&self, raw_notes: &str) -> Result<MeetingMinutes, DomainError> {
        info!("Processing meeting notes ({} chars)", raw_notes.chars().count());
        let start_time = Instant::now();

        let prompt = build_minutes_prompt(raw_notes);
        let data = self
            .gateway
            .complete_as_json(&prompt, MINUTES_SYSTEM_PROMPT, EXTRACTION_TEMPERATURE)
            .await?;

        let minutes = coerce_minutes(&data)?;

        info!(
            "Minutes generated: {} topics, {} decisions, {} action items in {:.2}s",
            minutes.topics_discussed().len(),
            minutes.decision_count(),
            minutes.action_items().len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(minutes)
    }
}
