//! Chat resource facade.

use crate::client::Client;
use crate::error::Error;
use crate::types::chat::{ChatCompletion, Message};
use crate::Result;
use serde_json::{Map, Value};

const COMPLETIONS_PATH: &str = "/chat/completions";

/// Entry point for chat endpoints, obtained via [`Client::chat`].
pub struct Chat<'a> {
    client: &'a Client,
}

impl<'a> Chat<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn completions(&self) -> Completions<'a> {
        Completions {
            client: self.client,
        }
    }
}

/// The `/chat/completions` endpoint.
pub struct Completions<'a> {
    client: &'a Client,
}

/// Parameters for [`Completions::create`].
///
/// Fields added through [`extra`](ChatCompletionParams::extra) are forwarded
/// verbatim and never validated client-side; the wire schema evolves
/// independently of this crate.
#[derive(Debug, Clone)]
pub struct ChatCompletionParams {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    extra: Map<String, Value>,
}

impl ChatCompletionParams {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: 1.0,
            extra: Map::new(),
        }
    }

    /// Sampling temperature; defaults to 1.0.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Attach an additional payload field verbatim.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn into_payload(self) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("model".into(), Value::String(self.model));
        payload.insert(
            "messages".into(),
            serde_json::to_value(&self.messages).map_err(|e| Error::SchemaValidation {
                message: format!("failed to serialize messages: {}", e),
                body: None,
            })?,
        );
        payload.insert("temperature".into(), self.temperature.into());
        for (key, value) in self.extra {
            payload.insert(key, value);
        }
        Ok(Value::Object(payload))
    }
}

impl Completions<'_> {
    /// Create a chat completion.
    ///
    /// This endpoint must always answer with a body; a no-content result is a
    /// [`Error::Precondition`] failure here even though the generic client
    /// treats it as a valid outcome. A body that does not match
    /// [`ChatCompletion`] surfaces as [`Error::SchemaValidation`].
    pub fn create(&self, params: ChatCompletionParams) -> Result<ChatCompletion> {
        let payload = params.into_payload()?;
        let response = self.client.post(COMPLETIONS_PATH, None, &payload)?;

        let value = response.ok_or_else(|| Error::precondition("API returned empty response"))?;

        serde_json::from_value::<ChatCompletion>(value.clone()).map_err(|e| {
            Error::SchemaValidation {
                message: e.to_string(),
                body: Some(value),
            }
        })
    }
}
