//! Response classification: non-2xx responses into typed status errors.

use crate::error::{ApiStatusError, ErrorBody, RequestDescriptor};
use serde_json::Value;
use tracing::debug;

/// Classifies a non-2xx response into an [`ApiStatusError`].
///
/// Pure over its inputs; the caller extracts the status, the `x-request-id`
/// header, and the body text from the transport response.
///
/// The conventional envelope `{"error": {"message": ...}}` supplies the
/// message when present. A body that fails to decode as JSON, or that has a
/// different shape, degrades to the generic `Error <status>` message with the
/// raw text kept as the body. Classification itself never fails.
pub(crate) fn classify_response(
    request: RequestDescriptor,
    status: u16,
    request_id: Option<String>,
    body_text: &str,
) -> ApiStatusError {
    let (message, body) = match serde_json::from_str::<Value>(body_text) {
        Ok(value) => {
            let message = value
                .as_object()
                .and_then(|map| map.get("error"))
                .and_then(Value::as_object)
                .and_then(|envelope| envelope.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Error {}", status));
            (message, ErrorBody::Json(value))
        }
        Err(_) => {
            debug!(status, "error response body is not JSON");
            (
                format!("Error {}", status),
                ErrorBody::Text(body_text.to_string()),
            )
        }
    };

    ApiStatusError::new(status, message, request, body, request_id)
}
