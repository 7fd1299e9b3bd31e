// crates/ports/src/root.rs
use std::path::PathBuf;

use filekit_domain::{FileKitConfig, PathResolver};

/// Supplies the directory project-relative paths are anchored at.
pub trait RootProvider: Send + Sync {
    fn project_root(&self) -> PathBuf;

    fn resolver(&self) -> PathResolver {
        PathResolver::new(self.project_root())
    }
}

impl RootProvider for FileKitConfig {
    fn project_root(&self) -> PathBuf {
        self.project_root.clone()
    }
}
