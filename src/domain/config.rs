//! Runtime configuration resolved from the process environment.

use std::env::VarError;
use std::fmt;

use url::Url;

use super::AppError;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const TEST_TYPE_ENV: &str = "TEST_TYPE";
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

/// Label used when `TEST_TYPE` is unset.
pub const DEFAULT_TEST_TYPE: &str = "バランステスト";

const DEFAULT_API_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_MAX_TOKENS: u32 = 8192;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Claude API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Claude Messages API settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaudeApiConfig {
    /// API base URL; `v1/messages` is resolved against it.
    pub api_url: Url,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClaudeApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}

/// Configuration for a single playtest request.
#[derive(Debug, Clone)]
pub struct PlaytestConfig {
    pub api_key: ApiKey,
    pub test_type: String,
    pub api: ClaudeApiConfig,
}

impl PlaytestConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_var)
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// The credential is checked first so a missing key is reported before any
    /// other configuration problem.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Result<Option<String>, AppError>,
    {
        let api_key = non_empty(lookup(API_KEY_ENV)?)
            .map(ApiKey::new)
            .ok_or_else(|| AppError::MissingApiKey { var: API_KEY_ENV.to_string() })?;

        let test_type = resolve_test_type(&lookup)?;

        let mut api = ClaudeApiConfig::default();
        if let Some(raw) = non_empty(lookup(BASE_URL_ENV)?) {
            api.api_url = Url::parse(&raw).map_err(|e| {
                AppError::config_error(format!("Invalid {}: '{}' ({})", BASE_URL_ENV, raw, e))
            })?;
        }

        Ok(Self { api_key, test_type, api })
    }

    /// Replace the test-type label, e.g. from a command-line flag.
    pub fn with_test_type(mut self, test_type: Option<String>) -> Self {
        if let Some(label) = non_empty(test_type) {
            self.test_type = label;
        }
        self
    }
}

/// Resolve the test-type label, falling back to [`DEFAULT_TEST_TYPE`].
pub fn resolve_test_type<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<Option<String>, AppError>,
{
    Ok(non_empty(lookup(TEST_TYPE_ENV)?).unwrap_or_else(|| DEFAULT_TEST_TYPE.to_string()))
}

/// Read `name` from the process environment.
///
/// Unset is `None`; a value that is not valid UTF-8 is a configuration error.
pub fn env_var(name: &str) -> Result<Option<String>, AppError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(AppError::config_error(format!("{} is not valid UTF-8", name)))
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
