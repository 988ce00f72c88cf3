//! commit-msg - A CLI tool that suggests commit messages from a git diff.
//!
//! # Overview
//!
//! commit-msg sends the diff to the OpenAI chat completion API together with
//! a short few-shot prompt, and returns the single suggested message along
//! with what the request cost.

pub mod commit;
pub mod config;
pub mod error;
pub mod hook;
pub mod openai;

// Re-export commonly used types
pub use commit::{CommitAssistant, GetTypeResponse, MessageConfig, Style};
pub use config::{Settings, parse_timeout};
pub use error::{ChatCompletionError, CommitAssistError, ConfigError, HookError};
pub use openai::{ChatCompleter, Message, Model, OpenAiClient, Role};
