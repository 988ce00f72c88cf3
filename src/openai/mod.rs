//! OpenAI chat completion client.
//!
//! See <https://platform.openai.com/docs/guides/chat/introduction>.

pub mod client;
pub mod model;
pub mod types;

pub use client::{ChatCompleter, DEFAULT_BASE_URL, OpenAiClient};
pub use model::{Model, Pricing};
pub use types::{ChatCompletionResponse, Message, Role, Usage};
