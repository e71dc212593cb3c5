//! Shared testing utilities for playtest CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a project directory with both documents present.
    pub fn with_documents(guide: &str, rules: &str) -> Self {
        let ctx = Self::new();
        ctx.write("CLAUDE.md", guide);
        ctx.write("Rule.md", rules);
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        self.root.child(relative).write_str(content).expect("Failed to write test file");
    }

    /// Build a command for the `playtest` binary with a clean environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("playtest").expect("Failed to locate playtest binary");
        cmd.current_dir(self.work_dir())
            .env_remove("ANTHROPIC_API_KEY")
            .env_remove("TEST_TYPE")
            .env_remove("ANTHROPIC_BASE_URL");
        cmd
    }

    /// Build a command pointed at a mock API server.
    pub fn cli_against(&self, server_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("ANTHROPIC_API_KEY", "sk-test").env("ANTHROPIC_BASE_URL", server_url);
        cmd
    }

    /// Response logs written under `scripts/`, sorted by name.
    pub fn logs(&self) -> Vec<PathBuf> {
        let dir = self.work_dir().join("scripts");
        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut logs: Vec<PathBuf> = entries.map(|e| e.expect("dir entry").path()).collect();
        logs.sort();
        logs
    }

    /// Content of the only response log.
    pub fn only_log(&self) -> (String, String) {
        let logs = self.logs();
        assert_eq!(logs.len(), 1, "expected exactly one log, found {:?}", logs);
        let name = logs[0].file_name().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&logs[0]).expect("Failed to read log");
        (name, content)
    }
}

/// Messages API success body with a single text block.
#[allow(dead_code)]
pub fn text_response(text: &str) -> String {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
    .to_string()
}
