//! Commit message suggestion via the chat completion API.

use std::time::Duration;

use tracing::debug;

use crate::commit::prompt::{UNSURE_MARKER, build_messages};
use crate::commit::style::MessageConfig;
use crate::error::CommitAssistError;
use crate::openai::{ChatCompleter, Model, OpenAiClient};

/// Model used for every suggestion.
pub const COMMIT_MODEL: Model = Model::GPT_3_5_TURBO;

/// Low temperature keeps suggestions focused and repeatable.
pub const COMMIT_TEMPERATURE: f32 = 0.2;

/// A suggested commit message.
#[derive(Debug, Clone, PartialEq)]
pub struct GetTypeResponse {
    pub message: String,
    /// Cost of the request in cents.
    pub cost: f64,
}

/// Suggests commit messages for git diffs.
pub struct CommitAssistant<C = OpenAiClient> {
    client: C,
}

impl<C: ChatCompleter> CommitAssistant<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Suggest a commit message for `git_diff`.
    ///
    /// `config` defaults to a descriptive, non-conventional message. The
    /// request is bounded by `timeout`; nothing is retried.
    pub async fn get_commit_message(
        &self,
        git_diff: &str,
        config: Option<&MessageConfig>,
        timeout: Duration,
    ) -> Result<GetTypeResponse, CommitAssistError> {
        let config = config.copied().unwrap_or_default();
        let messages = build_messages(git_diff, &config);

        debug!(
            "Requesting commit message: style={}, conventional={}, diff={} chars",
            config.style,
            config.conventional_commit,
            git_diff.len()
        );

        let response = self
            .client
            .chat_completion(&messages, &COMMIT_MODEL, COMMIT_TEMPERATURE, timeout)
            .await?;

        let [message] = <[String; 1]>::try_from(response.messages)
            .map_err(|messages| CommitAssistError::UnexpectedMessageCount(messages.len()))?;

        if message.contains(UNSURE_MARKER) {
            return Err(CommitAssistError::Unsure(message));
        }

        Ok(GetTypeResponse {
            message,
            cost: response.cost * 100.0,
        })
    }
}
