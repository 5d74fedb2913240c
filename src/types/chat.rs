//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// Request-side chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: text.into(),
        }
    }
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A completed chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Unique request id assigned by the server.
    pub id: String,
    /// Always `"chat.completion"`.
    pub object: String,
    /// Unix timestamp of creation.
    pub created: i64,
    /// Model that produced the response.
    pub model: String,
    /// Answers, ordered by index.
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

/// One answer within a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatCompletionMessage,
    pub finish_reason: FinishReason,
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    /// Always `"assistant"` on the response side.
    pub role: MessageRole,
    pub content: Option<String>,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the answer.
    Stop,
    /// Truncated at the token limit.
    Length,
    /// Rejected by the content filter.
    ContentFilter,
}

/// Token accounting for a completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completion_deserializes_from_wire_shape() {
        let value = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1719000000,
            "model": "omni-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hi"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}
        });
        let completion: ChatCompletion = serde_json::from_value(value).unwrap();
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].finish_reason, FinishReason::Stop);
        assert_eq!(completion.choices[0].message.content.as_deref(), Some("hi"));
        assert_eq!(completion.usage.unwrap().total_tokens, 4);
    }

    #[test]
    fn usage_is_optional_and_content_nullable() {
        let value = json!({
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 1719000001,
            "model": "omni-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": null},
                "finish_reason": "content_filter"
            }]
        });
        let completion: ChatCompletion = serde_json::from_value(value).unwrap();
        assert!(completion.usage.is_none());
        assert_eq!(
            completion.choices[0].finish_reason,
            FinishReason::ContentFilter
        );
        assert!(completion.choices[0].message.content.is_none());
    }

    #[test]
    fn request_messages_serialize_with_lowercase_roles() {
        let message = Message::user("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hello");
    }
}
