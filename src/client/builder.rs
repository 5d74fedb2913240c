//! Client construction.

use crate::client::core::{Client, ClientConfig};
use crate::constants::{
    os_name, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, SDK_NAME,
    USER_AGENT,
};
use crate::error::Error;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use url::Url;

/// Builder for [`Client`].
///
/// Keep this surface area small and predictable: credential, endpoint,
/// timeout, retry budget, extra default headers.
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    max_retries: u32,
    custom_headers: Vec<(String, String)>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            custom_headers: Vec::new(),
        }
    }

    /// Set the API key explicitly. Without this, `build()` falls back to the
    /// `OMNIEDGE_API_KEY` environment variable.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the default API endpoint. Primarily for testing against mock
    /// servers and for self-hosted deployments.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Default per-request timeout (60s when unset). Overridable per call via
    /// [`RequestOptions`](crate::RequestOptions).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry budget stored on the client. Advisory only: request dispatch
    /// does not execute a retry loop; callers that want retries drive them
    /// from this value and [`Error::is_retryable`](crate::Error::is_retryable).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Add a default header sent on every request. Wins over the SDK's own
    /// defaults on name conflicts.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Configuration`] when no API key is available from
    /// either the builder or the environment, when the base URL does not
    /// parse, or when a custom header is malformed. No network activity
    /// happens here beyond transport construction.
    pub fn build(self) -> Result<Client> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()).ok_or_else(|| {
                Error::configuration(format!(
                    "The api_key client option must be set either by passing api_key \
                     to the client or by setting the {} environment variable",
                    API_KEY_ENV
                ))
            })?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("invalid base_url {:?}: {}", base_url, e)))?;
        // Concatenation with request paths expects no trailing slash.
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        insert_header(&mut headers, "Authorization", &format!("Bearer {}", api_key))?;
        insert_header(&mut headers, "Content-Type", "application/json")?;
        insert_header(&mut headers, "User-Agent", USER_AGENT.as_str())?;
        insert_header(&mut headers, &format!("X-{}-Lang", SDK_NAME), "rust")?;
        insert_header(&mut headers, &format!("X-{}-OS", SDK_NAME), os_name())?;
        for (name, value) in &self.custom_headers {
            insert_header(&mut headers, name, value)?;
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to build transport: {}", e)))?;

        Ok(Client::from_parts(
            ClientConfig {
                base_url,
                timeout: self.timeout,
                max_retries: self.max_retries,
            },
            headers,
            http,
        ))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::configuration(format!("invalid header name {:?}: {}", name, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| Error::configuration(format!("invalid header value for {}: {}", name, e)))?;
    headers.insert(name, value);
    Ok(())
}
