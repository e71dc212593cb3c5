//! Text-completion request and outcome types.

use super::ClaudeApiConfig;

/// Role of a message sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
}

impl MessageRole {
    /// Convert to API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// A single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Request carrying `prompt` as the only user message.
    pub fn single_user_message(config: &ClaudeApiConfig, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            messages: vec![Message { role: MessageRole::User, content: prompt.into() }],
        }
    }
}

/// One element of a completion's content list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(String),
    /// Any non-text block, identified by its type tag.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    pub content: Vec<ContentBlock>,
}

/// Result of one call to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(Completion),
    /// The service rejected the request or could not be reached.
    ServiceError { message: String, status: Option<u16> },
    /// Failure not attributable to the service.
    UnexpectedError(String),
}
