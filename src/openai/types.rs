//! Wire types for the chat completions endpoint.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Model;

/// Role of a message in a conversation.
///
/// A conversation is usually a system message first, followed by
/// alternating user and assistant messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sets the behavior of the assistant.
    System,
    /// Instructs the assistant.
    User,
    /// Prior responses, or developer-written examples of desired behavior.
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
}

/// Token usage as reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: i64,
    #[serde(default)]
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawChoiceMessage {
    #[serde(default)]
    #[allow(dead_code)]
    pub role: Option<String>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawChoice {
    pub message: RawChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: u32,
}

/// Response body as returned by the provider.
#[derive(Debug, Deserialize)]
pub(crate) struct RawChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub object: String,
    pub created: i64,
    #[serde(default)]
    pub model: String,
    pub usage: Usage,
    pub choices: Vec<RawChoice>,
}

/// Decoded chat completion result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionResponse {
    pub created: DateTime<Utc>,
    pub model: Model,
    /// Cost of the request in dollars.
    pub cost: f64,
    pub usage: Usage,
    /// Answer texts, in the order the provider returned them.
    pub messages: Vec<String>,
}
