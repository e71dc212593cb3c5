//! Project directory port definition.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::TestOutputEntry;

/// Port for reading project documents and writing run artifacts.
pub trait ProjectStore {
    /// Project root that relative names resolve against.
    fn root(&self) -> &Path;

    /// Whether the document `name` exists under the root.
    fn document_exists(&self, name: &str) -> bool;

    /// Read the document `name` as UTF-8 text.
    fn read_document(&self, name: &str) -> io::Result<String>;

    /// Write a log file into `dir`, creating the directory when needed.
    ///
    /// Returns the path of the written file.
    fn write_log(&self, dir: &str, file_name: &str, contents: &str) -> io::Result<PathBuf>;

    /// Markdown files directly under `dir`, or `None` when `dir` does not exist.
    fn list_markdown(&self, dir: &str) -> io::Result<Option<Vec<TestOutputEntry>>>;
}
