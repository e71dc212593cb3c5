use std::io;

use thiserror::Error;

/// Library-wide error type for playtest requests.
///
/// Every variant is terminal for the run; `main` prints it and exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside the document and log paths.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The API credential variable is unset or empty.
    #[error("{var} environment variable is not set")]
    MissingApiKey { var: String },

    /// The HTTP client for the Claude API could not be built.
    #[error("Claude API client initialization failed: {0}")]
    ClientInit(String),

    /// One or both required project documents are missing.
    #[error(
        "Required files not found in {root}\n{guide_name} exists: {guide_exists}\n{rules_name} exists: {rules_exists}"
    )]
    MissingDocuments {
        root: String,
        guide_name: String,
        guide_exists: bool,
        rules_name: String,
        rules_exists: bool,
    },

    /// A project document exists but could not be read as UTF-8 text.
    #[error("Failed to read project file {path}: {source}")]
    DocumentRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Prompt template rendering failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(String),

    /// The Claude API reported a failure or could not be reached.
    #[error("Claude API error: {message}")]
    ClaudeApi { message: String, status: Option<u16> },

    /// The Claude API answered with no content blocks.
    #[error("Claude API returned a response with no content blocks")]
    EmptyCompletion,

    /// Any other failure while requesting or recording the playtest.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        AppError::Unexpected(message.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
