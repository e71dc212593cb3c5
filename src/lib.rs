//! playtest-requester: send a ruleset playtest request to the Claude API and record the response.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{FilesystemProjectStore, HttpClaudeClient, SystemClock};
use app::{
    AppContext,
    commands::{preview, request},
};
use domain::{PlaytestConfig, PlaytestPrompt};

pub use app::commands::request::PlaytestReport;
pub use domain::AppError;

/// Options for a playtest request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the `TEST_TYPE` environment variable.
    pub test_type: Option<String>,
}

/// Send one playtest request for the project in the current directory.
///
/// Reads configuration from the environment, `CLAUDE.md` and `Rule.md` from the
/// current directory, writes the response log under `scripts/`, and reports the
/// newest report in `test/`.
pub fn request_playtest(options: RequestOptions) -> Result<PlaytestReport, AppError> {
    let config = PlaytestConfig::from_env()?.with_test_type(options.test_type);

    let client = HttpClaudeClient::new(&config.api_key, &config.api)?;
    println!("✅ Claude API client initialized");

    let store = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(store, SystemClock);
    request::execute(&ctx, &client, &config)
}

/// Render the prompt a request would send, without a credential or network access.
pub fn preview_prompt(test_type: Option<String>) -> Result<PlaytestPrompt, AppError> {
    let test_type = match test_type.filter(|label| !label.trim().is_empty()) {
        Some(label) => label,
        None => domain::config::resolve_test_type(domain::config::env_var)?,
    };

    let store = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(store, SystemClock);
    preview::execute(&ctx, &test_type)
}
