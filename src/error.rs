//! Error types for commit-msg modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the chat completion client.
#[derive(Error, Debug)]
pub enum ChatCompletionError {
    #[error("temperature must be between 0 and 1 (inclusive), got {0}")]
    InvalidTemperature(f32),

    #[error("Failed to send chat completion request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Chat completion request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Got status code {status:?}, expected 200 OK")]
    Status { status: String, body: String },

    #[error("Could not decode chat completion response: {0}")]
    Decode(String),
}

impl ChatCompletionError {
    /// Whether the request was cut off by its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatCompletionError::Timeout(_))
    }
}

/// Errors from commit message generation.
#[derive(Error, Debug)]
pub enum CommitAssistError {
    #[error("Unknown commit message style '{0}'. Expected one of: descriptive, conversational, list, problem-solution")]
    InvalidStyle(String),

    #[error("Could not do chat completion request: {0}")]
    Completion(#[from] ChatCompletionError),

    #[error("Unexpected number of messages returned, got {0}")]
    UnexpectedMessageCount(usize),

    /// The model answered, but signalled it could not describe the diff.
    #[error("{0}")]
    Unsure(String),
}

impl CommitAssistError {
    /// Whether the underlying request was cut off by its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CommitAssistError::Completion(e) if e.is_timeout())
    }

    /// Process exit code used by the CLI for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommitAssistError::InvalidStyle(_) => 1,
            CommitAssistError::UnexpectedMessageCount(_) => 2,
            CommitAssistError::Unsure(_) => 3,
            CommitAssistError::Completion(e) if e.is_timeout() => 4,
            CommitAssistError::Completion(_) => 5,
        }
    }
}

/// Errors from environment configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set. Export your OpenAI API key to use commit-msg")]
    MissingApiKey,

    #[error("Invalid timeout '{0}'. Use a duration such as 5s, 500ms or 1m30s")]
    InvalidTimeout(String),
}

/// Errors from reading the commit message file.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
