//! AI-suggested commit messages.

pub mod message;
pub mod prompt;
pub mod style;

pub use message::{COMMIT_MODEL, COMMIT_TEMPERATURE, CommitAssistant, GetTypeResponse};
pub use prompt::{UNSURE_MARKER, build_messages};
pub use style::{MessageConfig, Style};
