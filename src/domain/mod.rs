pub mod completion;
pub mod config;
pub mod error;
pub mod playtest_log;
pub mod project;
pub mod prompt;
pub mod test_output;

pub use completion::{
    Completion, CompletionOutcome, CompletionRequest, ContentBlock, Message, MessageRole,
};
pub use config::{ApiKey, ClaudeApiConfig, DEFAULT_TEST_TYPE, PlaytestConfig};
pub use error::AppError;
pub use playtest_log::PlaytestLog;
pub use project::{GUIDE_FILE, LOG_DIR, ProjectDocuments, RULES_FILE, TEST_OUTPUT_DIR};
pub use prompt::{PlaytestPrompt, RULES_EXCERPT_CHARS};
pub use test_output::{LatestTestOutput, TestOutputEntry};
