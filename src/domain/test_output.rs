//! Observation of the model-populated test-output directory.

use std::time::SystemTime;

/// A markdown report found in the test-output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutputEntry {
    pub file_name: String,
    pub modified: SystemTime,
}

/// What the end-of-run check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestTestOutput {
    /// The test-output directory does not exist; nothing was checked.
    DirectoryMissing,
    /// The directory exists but holds no markdown reports.
    NotFound,
    Found { file_name: String },
    /// Listing the directory failed.
    Unreadable { reason: String },
}

impl LatestTestOutput {
    /// Pick the most recently modified entry.
    pub fn from_entries(entries: Vec<TestOutputEntry>) -> Self {
        let mut entries = entries;
        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        match entries.into_iter().next() {
            Some(latest) => LatestTestOutput::Found { file_name: latest.file_name },
            None => LatestTestOutput::NotFound,
        }
    }
}
