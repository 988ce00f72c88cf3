//! HTTP client for the chat completions endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::ChatCompletionError;

use super::model::Model;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, Message, RawChatCompletionResponse};

/// Default API base. The client always posts to `{base}/chat/completions`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Anything that can answer a chat completion request.
///
/// The assistant depends on this trait rather than on [`OpenAiClient`]
/// so tests can substitute a fake.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn chat_completion(
        &self,
        messages: &[Message],
        model: &Model,
        temperature: f32,
        timeout: Duration,
    ) -> Result<ChatCompletionResponse, ChatCompletionError>;
}

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at an OpenAI-compatible endpoint other than the default.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, base_url)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }

    /// Do a request to the chat completion API.
    ///
    /// `temperature` decides how deterministic the model is and must lie in
    /// `[0, 1]`. Lower values give more focused, deterministic completions;
    /// higher values give more diverse ones.
    ///
    /// The request, including reading the response body, is bounded by
    /// `timeout`. A zero timeout fails with [`ChatCompletionError::Timeout`]
    /// without sending anything.
    pub async fn chat_completion_request(
        &self,
        messages: &[Message],
        model: &Model,
        temperature: f32,
        timeout: Duration,
    ) -> Result<ChatCompletionResponse, ChatCompletionError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ChatCompletionError::InvalidTemperature(temperature));
        }

        if timeout.is_zero() {
            return Err(ChatCompletionError::Timeout(timeout));
        }

        let body = ChatCompletionRequest {
            model: model.as_str(),
            messages,
            temperature,
        };

        debug!(
            "Sending chat completion request: model={}, messages={}, temperature={}",
            model,
            messages.len(),
            temperature
        );

        let (status, text) = tokio::time::timeout(timeout, self.send(&body))
            .await
            .map_err(|_| ChatCompletionError::Timeout(timeout))?
            .map_err(|e| classify_transport_error(e, timeout))?;

        if status != StatusCode::OK {
            warn!("Chat completion request failed with status {}", status);
            return Err(ChatCompletionError::Status {
                status: status.to_string(),
                body: text,
            });
        }

        decode_response(&text, model)
    }

    async fn send(
        &self,
        body: &ChatCompletionRequest<'_>,
    ) -> Result<(StatusCode, String), reqwest::Error> {
        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatCompleter for OpenAiClient {
    async fn chat_completion(
        &self,
        messages: &[Message],
        model: &Model,
        temperature: f32,
        timeout: Duration,
    ) -> Result<ChatCompletionResponse, ChatCompletionError> {
        self.chat_completion_request(messages, model, temperature, timeout)
            .await
    }
}

fn classify_transport_error(err: reqwest::Error, timeout: Duration) -> ChatCompletionError {
    if err.is_timeout() {
        ChatCompletionError::Timeout(timeout)
    } else {
        ChatCompletionError::Transport(err)
    }
}

/// Decode a 200 response body and price it for `model`.
fn decode_response(text: &str, model: &Model) -> Result<ChatCompletionResponse, ChatCompletionError> {
    let raw: RawChatCompletionResponse =
        serde_json::from_str(text).map_err(|e| ChatCompletionError::Decode(e.to_string()))?;

    let created = DateTime::from_timestamp(raw.created, 0).ok_or_else(|| {
        ChatCompletionError::Decode(format!("invalid created timestamp {}", raw.created))
    })?;

    debug!(
        "Chat completion {} from {}: {} prompt + {} completion = {} tokens",
        raw.id,
        raw.model,
        raw.usage.prompt_tokens,
        raw.usage.completion_tokens,
        raw.usage.total_tokens
    );

    let messages = raw
        .choices
        .into_iter()
        .map(|choice| {
            debug!(
                "Choice {} finished with reason {:?}",
                choice.index, choice.finish_reason
            );
            choice.message.content
        })
        .collect();

    Ok(ChatCompletionResponse {
        created,
        model: model.clone(),
        cost: model.cost(raw.usage.total_tokens),
        usage: raw.usage,
        messages,
    })
}
