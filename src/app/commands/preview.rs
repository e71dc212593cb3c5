//! Prompt preview: render the playtest prompt without contacting the API.

use crate::app::AppContext;
use crate::domain::{AppError, PlaytestPrompt};
use crate::ports::{Clock, ProjectStore};

use super::documents::load_documents;

/// Render the prompt a request for `test_type` would send right now.
pub fn execute<S: ProjectStore, K: Clock>(
    ctx: &AppContext<S, K>,
    test_type: &str,
) -> Result<PlaytestPrompt, AppError> {
    let documents = load_documents(ctx.store())?;
    PlaytestPrompt::compose(test_type, &documents, ctx.clock().now())
}
