//! # omniedge
//!
//! Synchronous Rust client for the OmniEdge chat-completions API, plus a
//! peer utility for pointing local IDE assistants at an OmniEdge endpoint.
//!
//! ## Overview
//!
//! The client is a thin wrapper over a blocking HTTP transport: it injects
//! identity headers, interprets response statuses, and maps failures into a
//! typed error taxonomy callers can match on. Resource facades such as
//! [`resources::chat`] shape endpoint payloads and parse typed results.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use omniedge::{ChatCompletionParams, Client, Message};
//!
//! fn main() -> omniedge::Result<()> {
//!     let client = Client::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let completion = client.chat().completions().create(
//!         ChatCompletionParams::new("omni-1", vec![Message::user("Hello!")])
//!             .temperature(0.7),
//!     )?;
//!
//!     println!("{:?}", completion.choices[0].message.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Synchronous client, builder, per-call options |
//! | [`error`] | Error taxonomy and status classification types |
//! | [`types`] | Typed wire schemas (chat completions) |
//! | [`resources`] | Endpoint facades built on the client |
//! | [`tools`] | Local IDE-assistant settings tools |
//!
//! ## Error handling
//!
//! All failures surface as [`Error`]; none are retried internally. The
//! configured retry budget is advisory (see
//! [`ClientBuilder::max_retries`]); callers drive their own retry loops
//! using [`Error::is_retryable`].

pub mod client;
pub mod constants;
pub mod error;
pub mod resources;
pub mod tools;
pub mod types;

pub use client::{Client, ClientBuilder, RequestOptions};
pub use error::{ApiStatusError, Error, ErrorBody, RequestDescriptor, StatusErrorKind};
pub use resources::chat::{Chat, ChatCompletionParams, Completions};
pub use tools::{ConfigTool, SetConfigResult, ToolError};
pub use types::chat::{
    ChatCompletion, ChatCompletionMessage, Choice, CompletionUsage, FinishReason, Message,
    MessageRole,
};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
