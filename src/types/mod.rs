//! Typed wire schemas.

pub mod chat;

pub use chat::{
    ChatCompletion, ChatCompletionMessage, Choice, CompletionUsage, FinishReason, Message,
    MessageRole,
};
