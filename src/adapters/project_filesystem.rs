use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TestOutputEntry};
use crate::ports::ProjectStore;

const MARKDOWN_SUFFIX: &str = ".md";

/// Filesystem-based project store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn document_exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn read_document(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(name))
    }

    fn write_log(&self, dir: &str, file_name: &str, contents: &str) -> io::Result<PathBuf> {
        let dir = self.root.join(dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn list_markdown(&self, dir: &str) -> io::Result<Option<Vec<TestOutputEntry>>> {
        let dir = self.root.join(dir);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !is_markdown(&path) {
                continue;
            }
            // Follows symlinks; dangling links are skipped.
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(TestOutputEntry { file_name, modified: metadata.modified()? });
        }
        Ok(Some(entries))
    }
}

/// `*.md` with pathlib glob semantics: dot-files match too, including a bare `.md`.
fn is_markdown(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX))
}
