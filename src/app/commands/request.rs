//! Playtest request command.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, CompletionOutcome, CompletionRequest, ContentBlock, LOG_DIR, LatestTestOutput,
    PlaytestConfig, PlaytestLog, PlaytestPrompt, TEST_OUTPUT_DIR,
};
use crate::ports::{Clock, CompletionClient, ProjectStore};

use super::documents::load_documents;

/// Result of a completed playtest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytestReport {
    pub test_type: String,
    /// Path of the written response log.
    pub log_path: PathBuf,
    /// Response length in characters.
    pub response_chars: usize,
    pub latest_output: LatestTestOutput,
}

/// Compose the playtest prompt, send it once, and record the response.
pub fn execute<S, K, C>(
    ctx: &AppContext<S, K>,
    client: &C,
    config: &PlaytestConfig,
) -> Result<PlaytestReport, AppError>
where
    S: ProjectStore,
    K: Clock,
    C: CompletionClient + ?Sized,
{
    let documents = load_documents(ctx.store())?;
    println!("✅ Project files loaded");

    let now = ctx.clock().now();
    let test_type = config.test_type.as_str();
    let prompt = PlaytestPrompt::compose(test_type, &documents, now)?;

    println!("🚀 Sending {} playtest request to Claude API...", test_type);
    let request = CompletionRequest::single_user_message(&config.api, prompt.into_string());
    let response = response_text(client.complete(&request))?;
    println!("✅ Received response from Claude API");

    let log = PlaytestLog { test_type, timestamp: now, response: &response };
    let log_path = ctx
        .store()
        .write_log(LOG_DIR, &log.file_name(), &log.render())
        .map_err(|e| AppError::unexpected(format!("Failed to write response log: {}", e)))?;
    println!("📝 Saved response log: {}", log_path.display());

    let latest_output = observe_test_output(ctx.store());
    match &latest_output {
        LatestTestOutput::Found { file_name } => println!("✅ Latest test file: {}", file_name),
        LatestTestOutput::NotFound => println!("⚠️  No test file found in {}/", TEST_OUTPUT_DIR),
        LatestTestOutput::Unreadable { reason } => {
            println!("⚠️  Could not list {}/: {}", TEST_OUTPUT_DIR, reason)
        }
        LatestTestOutput::DirectoryMissing => {}
    }

    println!("🎉 Playtest request complete");

    Ok(PlaytestReport {
        test_type: test_type.to_string(),
        log_path,
        response_chars: response.chars().count(),
        latest_output,
    })
}

/// Text of the first content block, or the error the outcome maps to.
fn response_text(outcome: CompletionOutcome) -> Result<String, AppError> {
    match outcome {
        CompletionOutcome::Success(completion) => match completion.content.into_iter().next() {
            Some(ContentBlock::Text(text)) => Ok(text),
            Some(ContentBlock::Other(kind)) => Err(AppError::unexpected(format!(
                "first content block has type '{}', expected text",
                kind
            ))),
            None => Err(AppError::EmptyCompletion),
        },
        CompletionOutcome::ServiceError { message, status } => {
            Err(AppError::ClaudeApi { message, status })
        }
        CompletionOutcome::UnexpectedError(message) => Err(AppError::Unexpected(message)),
    }
}

/// Observe the test-output directory without ever failing the run.
fn observe_test_output<S: ProjectStore>(store: &S) -> LatestTestOutput {
    match store.list_markdown(TEST_OUTPUT_DIR) {
        Ok(None) => LatestTestOutput::DirectoryMissing,
        Ok(Some(entries)) => LatestTestOutput::from_entries(entries),
        Err(e) => LatestTestOutput::Unreadable { reason: e.to_string() },
    }
}
