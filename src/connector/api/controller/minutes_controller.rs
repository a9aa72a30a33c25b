use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::super::container::Container;
use super::super::dto::{GenerateMinutesRequest, MinutesWithMetadata};
use super::super::error::ApiError;
use super::super::validation::validate_raw_notes;
use crate::domain::DomainError;

/// `POST /generate-minutes`: raw notes in, structured minutes plus metadata out.
pub async fn generate_minutes(
    State(container): State<Arc<Container>>,
    payload: Result<Json<GenerateMinutesRequest>, JsonRejection>,
) -> Result<Json<MinutesWithMetadata>, ApiError> {
    let Json(request) = payload?;
    let input_character_count =
        validate_raw_notes(&request.raw_notes, container.config().max_input_length)?;

    let span = info_span!("generate_minutes", request_id = %Uuid::new_v4());
    async move {
        info!(
            "Received meeting notes: {} chars, language: {}",
            input_character_count, request.language
        );

        let start_time = Instant::now();
        let timeout = container.config().request_timeout;
        let use_case = container.generate_minutes_use_case();

        let minutes = tokio::time::timeout(timeout, use_case.execute(&request.raw_notes))
            .await
            .map_err(|_| DomainError::Timeout(timeout.as_secs()))??;

        let elapsed_ms = round_millis(start_time.elapsed().as_secs_f64() * 1000.0);
        info!("Minutes generated in {}ms", elapsed_ms);

        Ok::<_, ApiError>(Json(MinutesWithMetadata {
            minutes,
            processing_time_ms: elapsed_ms,
            model_used: container.model_name().to_string(),
            input_character_count,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }))
    }
    .instrument(span)
    .await
}

fn round_millis(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_millis(12.3456), 12.35);
        assert_eq!(round_millis(0.001), 0.0);
    }
}
