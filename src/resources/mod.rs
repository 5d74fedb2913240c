//! Resource facades: thin, typed wrappers over the generic client.

pub mod chat;

pub use chat::{Chat, ChatCompletionParams, Completions};
