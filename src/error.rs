//! Unified error taxonomy for the OmniEdge client.
//!
//! Every failure surfaces to the caller as one of these variants; nothing is
//! swallowed or retried internally. Callers can match on the variant kind, or
//! for status errors on [`StatusErrorKind`] / the numeric status code, to
//! decide whether to retry, surface, or abort.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Method and URL of the request that produced an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: String,
    pub url: String,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Raw response body attached to a status error.
///
/// `Json` when the body decoded as JSON, `Text` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    /// The nested `error` mapping from the conventional envelope
    /// `{"error": {"message": ..., "code": ..., "param": ..., "type": ...}}`,
    /// if the body has that shape.
    pub fn error_envelope(&self) -> Option<&serde_json::Map<String, Value>> {
        match self {
            ErrorBody::Json(Value::Object(map)) => map.get("error")?.as_object(),
            _ => None,
        }
    }

    fn envelope_field(&self, key: &str) -> Option<String> {
        self.error_envelope()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Closed mapping from HTTP status codes to error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusErrorKind {
    /// 400
    BadRequest,
    /// 401
    Authentication,
    /// 403
    PermissionDenied,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 429
    RateLimit,
    /// Any 5xx
    InternalServer,
    /// Every other non-2xx status
    Other,
}

impl StatusErrorKind {
    /// Selects the kind strictly by numeric status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimit,
            s if s >= 500 => Self::InternalServer,
            _ => Self::Other,
        }
    }

    /// Standard name, useful for logging and matching in tests.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::RateLimit => "rate_limit",
            Self::InternalServer => "internal_server",
            Self::Other => "status_error",
        }
    }
}

impl fmt::Display for StatusErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A non-2xx HTTP response, with the server's diagnostic fields.
#[derive(Debug, Clone)]
pub struct ApiStatusError {
    pub kind: StatusErrorKind,
    pub status_code: u16,
    pub message: String,
    pub request: RequestDescriptor,
    pub body: ErrorBody,
    /// Machine-readable error code from the envelope, when present.
    pub code: Option<String>,
    /// Offending parameter from the envelope, when present.
    pub param: Option<String>,
    /// Server-side error classification from the envelope, when present.
    pub error_type: Option<String>,
    /// `x-request-id` response header, when present.
    pub request_id: Option<String>,
}

impl ApiStatusError {
    /// Builds a status error, pulling `code`/`param`/`type` out of the
    /// envelope when the body carries one.
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        request: RequestDescriptor,
        body: ErrorBody,
        request_id: Option<String>,
    ) -> Self {
        let code = body.envelope_field("code");
        let param = body.envelope_field("param");
        let error_type = body.envelope_field("type");
        Self {
            kind: StatusErrorKind::from_status(status_code),
            status_code,
            message: message.into(),
            request,
            body,
            code,
            param,
            error_type,
            request_id,
        }
    }
}

impl fmt::Display for ApiStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} ({}): {}",
            self.status_code, self.kind, self.message
        )
    }
}

/// Unified error type for the OmniEdge client.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid client configuration; raised before any network
    /// activity and never retried.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network-level failure (DNS, connection refused, TLS, ...).
    #[error("Connection error. ({request})")]
    Connection { request: RequestDescriptor },

    /// The configured deadline elapsed before the transport completed.
    #[error("Request timed out. ({request})")]
    Timeout { request: RequestDescriptor },

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Status(ApiStatusError),

    /// A 2xx body did not match the expected typed result shape.
    #[error("Data returned by API invalid for expected schema: {message}")]
    SchemaValidation { message: String, body: Option<Value> },

    /// A local business rule failed before or after the wire exchange,
    /// e.g. an endpoint that must return a body returned none.
    #[error("{message}")]
    Precondition { message: String },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Error::Precondition {
            message: message.into(),
        }
    }

    /// The HTTP status code, for status errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Whether a caller-side retry is reasonable: transient transport
    /// failures, rate limiting, and server-side errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Connection { .. } | Error::Timeout { .. } => true,
            Error::Status(e) => matches!(
                e.kind,
                StatusErrorKind::RateLimit | StatusErrorKind::InternalServer
            ),
            _ => false,
        }
    }
}
