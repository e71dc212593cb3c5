use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::TestOutputEntry;
use crate::ports::ProjectStore;

/// In-memory project store for testing.
#[derive(Default)]
pub struct MemoryProjectStore {
    pub documents: RefCell<HashMap<String, String>>,
    pub unreadable: RefCell<Vec<String>>,
    pub logs: RefCell<HashMap<PathBuf, String>>,
    pub fail_log_writes: RefCell<bool>,
    pub markdown_dirs: RefCell<HashMap<String, Vec<TestOutputEntry>>>,
    root: PathBuf,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("/project"), ..Self::default() }
    }

    pub fn with_document(self, name: &str, content: &str) -> Self {
        self.documents.borrow_mut().insert(name.to_string(), content.to_string());
        self
    }

    /// Register a document that exists but fails to read.
    pub fn with_unreadable(self, name: &str) -> Self {
        self.documents.borrow_mut().insert(name.to_string(), String::new());
        self.unreadable.borrow_mut().push(name.to_string());
        self
    }

    pub fn with_markdown_dir(self, dir: &str, entries: Vec<TestOutputEntry>) -> Self {
        self.markdown_dirs.borrow_mut().insert(dir.to_string(), entries);
        self
    }

    pub fn with_failing_log_writes(self) -> Self {
        *self.fail_log_writes.borrow_mut() = true;
        self
    }

    pub fn written_logs(&self) -> Vec<(PathBuf, String)> {
        let mut logs: Vec<_> =
            self.logs.borrow().iter().map(|(p, c)| (p.clone(), c.clone())).collect();
        logs.sort();
        logs
    }
}

impl ProjectStore for MemoryProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn document_exists(&self, name: &str) -> bool {
        self.documents.borrow().contains_key(name)
    }

    fn read_document(&self, name: &str) -> io::Result<String> {
        if self.unreadable.borrow().iter().any(|n| n == name) {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
        }
        self.documents
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn write_log(&self, dir: &str, file_name: &str, contents: &str) -> io::Result<PathBuf> {
        if *self.fail_log_writes.borrow() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"));
        }
        let path = self.root.join(dir).join(file_name);
        self.logs.borrow_mut().insert(path.clone(), contents.to_string());
        Ok(path)
    }

    fn list_markdown(&self, dir: &str) -> io::Result<Option<Vec<TestOutputEntry>>> {
        Ok(self.markdown_dirs.borrow().get(dir).cloned())
    }
}
