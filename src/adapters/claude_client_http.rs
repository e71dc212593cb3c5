//! Claude Messages API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    ApiKey, AppError, ClaudeApiConfig, Completion, CompletionOutcome, CompletionRequest,
    ContentBlock,
};
use crate::ports::CompletionClient;

const X_API_KEY: &str = "x-api-key";
const ANTHROPIC_VERSION: &str = "anthropic-version";
const ANTHROPIC_VERSION_VALUE: &str = "2023-06-01";
const MESSAGES_PATH: &str = "v1/messages";
const DEFAULT_STATUS_MESSAGE: &str = "Claude API request failed";

/// HTTP transport for the Claude Messages API.
///
/// This client performs a single request per call.
#[derive(Clone)]
pub struct HttpClaudeClient {
    messages_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpClaudeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClaudeClient")
            .field("messages_url", &self.messages_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpClaudeClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: &ApiKey, config: &ClaudeApiConfig) -> Result<Self, AppError> {
        let mut key = HeaderValue::from_str(api_key.expose())
            .map_err(|e| AppError::ClientInit(format!("invalid API key: {}", e)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(X_API_KEY, key);
        headers.insert(ANTHROPIC_VERSION, HeaderValue::from_static(ANTHROPIC_VERSION_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ClientInit(format!("Failed to create HTTP client: {}", e)))?;

        let messages_url = messages_url(&config.api_url)?;

        Ok(Self { messages_url, client })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> CompletionOutcome {
        let body = match serde_json::to_vec(request) {
            Ok(body) => body,
            Err(e) => {
                return CompletionOutcome::UnexpectedError(format!(
                    "Failed to encode request: {}",
                    e
                ));
            }
        };

        let response = match self
            .client
            .post(self.messages_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
        {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                return CompletionOutcome::UnexpectedError(format!(
                    "Failed to build request: {}",
                    e
                ));
            }
            Err(e) => {
                return CompletionOutcome::ServiceError {
                    message: format!("HTTP request failed: {}", e),
                    status: None,
                };
            }
        };

        let status = response.status();
        let body_text = match response.text() {
            Ok(text) => text,
            Err(e) => {
                return CompletionOutcome::ServiceError {
                    message: format!("Failed to read response body: {}", e),
                    status: Some(status.as_u16()),
                };
            }
        };

        if status.is_success() {
            return match serde_json::from_str::<ApiResponse>(&body_text) {
                Ok(api_response) => CompletionOutcome::Success(api_response.into_completion()),
                Err(e) => CompletionOutcome::ServiceError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                },
            };
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        CompletionOutcome::ServiceError {
            message: format!("{} (status {})", message, status.as_u16()),
            status: Some(status.as_u16()),
        }
    }
}

/// Resolve the messages endpoint against `base`, treating `base` as a directory.
fn messages_url(base: &Url) -> Result<Url, AppError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(MESSAGES_PATH)
        .map_err(|e| AppError::ClientInit(format!("invalid API URL '{}': {}", base, e)))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ApiRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: request
                .messages
                .iter()
                .map(|m| ApiMessage { role: m.role.as_str(), content: &m.content })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ApiContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ApiContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    fn into_completion(self) -> Completion {
        let content = self
            .content
            .into_iter()
            .map(|block| match (block.kind.as_str(), block.text) {
                ("text", Some(text)) => ContentBlock::Text(text),
                _ => ContentBlock::Other(block.kind),
            })
            .collect();
        Completion { content }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpClaudeClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        self.send_request(&ApiRequest::from(request))
    }
}
