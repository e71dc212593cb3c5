//! Playtest prompt composition.

use chrono::NaiveDateTime;
use minijinja::{Environment, UndefinedBehavior, context};

use super::{AppError, ProjectDocuments};

const PLAYTEST_TEMPLATE_NAME: &str = "playtest.md.j2";
const PLAYTEST_TEMPLATE: &str = include_str!("../assets/prompts/playtest.md.j2");

/// Maximum number of characters of the rules document embedded in the prompt.
pub const RULES_EXCERPT_CHARS: usize = 3000;

const PROMPT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fully rendered prompt, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytestPrompt {
    content: String,
}

impl PlaytestPrompt {
    /// Render the playtest template for `test_type` at `now`.
    pub fn compose(
        test_type: &str,
        documents: &ProjectDocuments,
        now: NaiveDateTime,
    ) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let content = env
            .render_str(
                PLAYTEST_TEMPLATE,
                context! {
                    test_type => test_type,
                    guide => documents.guide.as_str(),
                    rules_excerpt => rules_excerpt(&documents.rules),
                    timestamp => now.format(PROMPT_TIMESTAMP_FORMAT).to_string(),
                },
            )
            .map_err(|err| {
                AppError::PromptAssembly(format!("{}: {}", PLAYTEST_TEMPLATE_NAME, err))
            })?;

        Ok(Self { content })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// The first [`RULES_EXCERPT_CHARS`] characters of `rules`.
///
/// Counts Unicode scalar values, so multi-byte text is never split.
pub fn rules_excerpt(rules: &str) -> &str {
    match rules.char_indices().nth(RULES_EXCERPT_CHARS) {
        Some((byte_index, _)) => &rules[..byte_index],
        None => rules,
    }
}
