//! Fixed project layout the requester reads from and writes to.

/// Playtest instructions for the model, included in full.
pub const GUIDE_FILE: &str = "CLAUDE.md";
/// Game rules, included as a truncated excerpt.
pub const RULES_FILE: &str = "Rule.md";
/// Directory receiving response logs.
pub const LOG_DIR: &str = "scripts";
/// Directory the model is asked to write playtest reports into.
pub const TEST_OUTPUT_DIR: &str = "test";

/// Contents of the two required project documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocuments {
    pub guide: String,
    pub rules: String,
}
