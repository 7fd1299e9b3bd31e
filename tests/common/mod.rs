//! Shared fixtures for the integration suite.

use std::{
    fs,
    path::PathBuf,
};

use filekit::{FileHelper, FileKitConfig, LineTerminator, PathSpec};
use tempfile::TempDir;

/// A throwaway project root with a helper anchored at it.
pub struct TempProject {
    dir: TempDir,
    pub helper: FileHelper,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = FileKitConfig::with_project_root(dir.path());
        config.line_terminator = LineTerminator::Lf;
        let helper = FileHelper::new(config);
        Self { dir, helper }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn create_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> Vec<u8> {
        fs::read(self.path(rel)).expect("read fixture")
    }
}

pub fn project(rel: &str) -> PathSpec {
    PathSpec::project(rel)
}
