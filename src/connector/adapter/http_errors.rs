use reqwest::StatusCode;
use tracing::warn;

use crate::domain::DomainError;

/// Map a transport-level `reqwest` failure onto the gateway's classification.
///
/// Anything that never produced an HTTP response (refused connection, DNS,
/// timeout) is a connection failure; decoding problems are not retryable.
pub(crate) fn classify_transport_error(provider: &str, err: reqwest::Error) -> DomainError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        DomainError::connection(format!("{provider}: request failed: {err}"))
    } else {
        DomainError::model_api(format!("{provider}: request failed: {err}"))
    }
}

/// Map a non-success HTTP status onto the gateway's classification.
///
/// Only 429 is retryable. The response body is logged, not returned.
pub(crate) fn classify_status(provider: &str, status: StatusCode, body: &str) -> DomainError {
    warn!("{provider}: API returned {status}: {body}");
    if status == StatusCode::TOO_MANY_REQUESTS {
        DomainError::rate_limited(format!("{provider}: API returned {status}"))
    } else {
        DomainError::model_api(format!("{provider}: API returned {status}"))
    }
}
