use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of a directory listing: parallel name and path vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub count: usize,
    pub names: Vec<String>,
    pub paths: Vec<String>,
}

impl Listing {
    pub fn push(&mut self, name: String, path: String) {
        self.names.push(name);
        self.paths.push(path);
        self.count = self.names.len();
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// An entry a recursive copy or move could not transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Progress of a recursive copy or move. Transferred entries are never rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeReport {
    pub files_transferred: usize,
    pub directories_created: usize,
    pub failures: Vec<TreeFailure>,
}

impl TreeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn record_failure(&mut self, path: impl Into<PathBuf>, reason: impl ToString) {
        self.failures.push(TreeFailure { path: path.into(), reason: reason.to_string() });
    }
}
