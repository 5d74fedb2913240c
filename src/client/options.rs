//! Per-call request options.

use std::time::Duration;

/// Overrides scoped to a single request.
///
/// Applied on top of the client-wide defaults for one dispatch only; the
/// client configuration itself is never mutated, so concurrent calls with
/// different options cannot leak into each other.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) timeout: Option<Duration>,
    pub(crate) headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the client timeout for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add or override a header for this call. Later values win over the
    /// client's default headers on name conflicts.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
