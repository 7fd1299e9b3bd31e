use std::path::PathBuf;

use filekit_domain::{PathResolver, PathSpec, naming::require_save_file_name};
use filekit_ports::FileSystem;
use filekit_shared_kernel::{DomainError, InfrastructureError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    pub create_directories: bool,
    pub overwrite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub full_path: PathBuf,
}

pub struct SaveFile<'a> {
    fs: &'a dyn FileSystem,
    resolver: &'a PathResolver,
}

impl<'a> SaveFile<'a> {
    pub fn new(fs: &'a dyn FileSystem, resolver: &'a PathResolver) -> Self {
        Self { fs, resolver }
    }

    /// Checks run in a fixed order and the write is the only mutation after
    /// them: empty path, file name, parent directory, existing target, write.
    pub fn run(&self, spec: &PathSpec, options: SaveOptions, bytes: &[u8]) -> Result<SavedFile> {
        if spec.is_empty() {
            return Err(DomainError::invalid_argument("file path not set").into());
        }
        let file_name = require_save_file_name(&spec.raw)?.to_string();
        let target = self.resolver.resolve(spec);

        if let Some(parent) = target.parent() {
            if !self.fs.dir_exists(&parent) {
                if !options.create_directories {
                    return Err(InfrastructureError::NotFound { what: "Directory", path: parent.into_path_buf() }.into());
                }
                self.fs
                    .create_dir_all(&parent)
                    .map_err(|err| InfrastructureError::failed("create directory", parent.as_path(), err))?;
            }
        }

        if self.fs.file_exists(&target) && !options.overwrite {
            return Err(InfrastructureError::AlreadyExists { path: target.into_path_buf() }.into());
        }

        self.fs.write(&target, bytes, false)?;
        log::debug!("saved {} bytes to {}", bytes.len(), target);
        Ok(SavedFile { file_name, full_path: target.into_path_buf() })
    }
}
