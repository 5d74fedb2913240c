//! Synchronous HTTP dispatch with consistent identity headers and
//! centralized error translation.

use crate::client::classify::classify_response;
use crate::client::options::RequestOptions;
use crate::error::{Error, RequestDescriptor};
use crate::resources::chat::Chat;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Immutable connection configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u32,
}

/// Synchronous OmniEdge API client.
///
/// Every method blocks the calling thread until the transport completes or
/// fails. The client holds no per-call mutable state; per-call overrides live
/// in [`RequestOptions`], so concurrent use from multiple threads is safe to
/// the extent the transport's connection pool is.
///
/// The transport is released by [`Client::close`] or implicitly when the
/// client is dropped; calls on a closed client fail fast with
/// [`Error::Connection`] without touching the network.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    headers: HeaderMap,
    http: Option<reqwest::blocking::Client>,
}

impl Client {
    /// Start building a client.
    pub fn builder() -> crate::client::builder::ClientBuilder {
        crate::client::builder::ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        config: ClientConfig,
        headers: HeaderMap,
        http: reqwest::blocking::Client,
    ) -> Self {
        Self {
            config,
            headers,
            http: Some(http),
        }
    }

    /// The configured endpoint, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Default per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Configured retry budget. Advisory: dispatch never consults it; see
    /// [`ClientBuilder::max_retries`](crate::ClientBuilder::max_retries).
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries
    }

    /// Chat resource facade.
    pub fn chat(&self) -> Chat<'_> {
        Chat::new(self)
    }

    /// Issue a request and interpret the response.
    ///
    /// Per-call `options` merge over the client defaults for this dispatch
    /// only. A 204 answer yields `Ok(None)`; any other 2xx yields the decoded
    /// JSON body, or the raw text as a JSON string when the body does not
    /// decode. Non-2xx statuses are classified into [`Error::Status`];
    /// transport failures map to [`Error::Timeout`] / [`Error::Connection`].
    pub fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&RequestOptions>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.config.base_url, path);
        let descriptor = RequestDescriptor::new(method.as_str(), &url);

        let http = self.http.as_ref().ok_or_else(|| Error::Connection {
            request: descriptor.clone(),
        })?;

        let mut timeout = self.config.timeout;
        let mut headers = self.headers.clone();
        if let Some(options) = options {
            if let Some(t) = options.timeout {
                timeout = t;
            }
            for (name, value) in &options.headers {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    Error::configuration(format!("invalid header name {:?}: {}", name, e))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    Error::configuration(format!("invalid header value for {}: {}", name, e))
                })?;
                headers.insert(name, value);
            }
        }

        debug!(method = %descriptor.method, url = %descriptor.url, "dispatching request");

        let mut builder = http
            .request(method, &url)
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    request: descriptor.clone(),
                }
            } else {
                debug!(error = %e, "transport failure");
                Error::Connection {
                    request: descriptor.clone(),
                }
            }
        })?;

        let status = response.status();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().map_err(|_| Error::Connection {
            request: descriptor.clone(),
        })?;

        if !status.is_success() {
            return Err(Error::Status(classify_response(
                descriptor,
                status.as_u16(),
                request_id,
                &text,
            )));
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        // Raw text fallback keeps non-JSON 2xx bodies observable.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(Some(Value::String(text))),
        }
    }

    /// `GET {path}`.
    pub fn get(&self, path: &str, options: Option<&RequestOptions>) -> Result<Option<Value>> {
        self.request(Method::GET, path, options, None)
    }

    /// `POST {path}` with a JSON body.
    pub fn post(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
        body: &Value,
    ) -> Result<Option<Value>> {
        self.request(Method::POST, path, options, Some(body))
    }

    /// `DELETE {path}`.
    pub fn delete(&self, path: &str, options: Option<&RequestOptions>) -> Result<Option<Value>> {
        self.request(Method::DELETE, path, options, None)
    }

    /// Release the transport. Idempotent; subsequent requests fail fast with
    /// [`Error::Connection`].
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            debug!("client closed, transport released");
        }
    }

    /// Whether [`Client::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }
}

impl Drop for Client {
    // Scoped acquisition/release: leaving scope always releases the
    // transport, error path included.
    fn drop(&mut self) {
        self.close();
    }
}
