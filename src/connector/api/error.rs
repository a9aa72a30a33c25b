use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::dto::ErrorResponse;
use crate::domain::DomainError;

pub const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your meeting notes. Please try again.";
pub const TIMEOUT_ERROR_MESSAGE: &str =
    "Generating minutes took too long. Please try again later.";

/// HTTP-facing error: a status code and the `detail` returned to the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Malformed bodies, missing fields and wrong types are all validation
/// failures from the caller's point of view.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        Self::unprocessable(rejection.body_text())
    }
}

/// Client errors keep their message; everything else is logged in full and
/// replaced by a generic message.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_client_error() {
            warn!("Processing error: {}", err);
            return Self::unprocessable(err.to_string());
        }

        match err {
            DomainError::Timeout(_) => {
                error!("Request timed out: {}", err);
                Self::new(StatusCode::GATEWAY_TIMEOUT, TIMEOUT_ERROR_MESSAGE)
            }
            other => {
                error!("Unexpected error: {:?}", other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.detail,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_422_with_message() {
        for err in [
            DomainError::invalid_input("too short"),
            DomainError::InvalidPriority("urgent".into()),
            DomainError::malformed_output("expected value", "nope"),
        ] {
            let message = err.to_string();
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(api.detail(), message);
        }
    }

    #[test]
    fn model_failures_are_500_without_detail() {
        for err in [
            DomainError::model_api("401 bad key sk-secret"),
            DomainError::RetriesExhausted { attempts: 3 },
            DomainError::connection("refused"),
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api.detail(), GENERIC_ERROR_MESSAGE);
        }
    }

    #[test]
    fn timeout_is_504() {
        let api = ApiError::from(DomainError::Timeout(120));
        assert_eq!(api.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
