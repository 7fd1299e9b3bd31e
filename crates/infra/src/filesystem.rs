// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use filekit_domain::ResolvedPath;
use filekit_ports::FileSystem;
use filekit_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// `FileSystem` port backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn file_exists(&self, path: &ResolvedPath) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &ResolvedPath) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &ResolvedPath) -> Result<()> {
        create_dir_all(path)
    }

    fn read(&self, path: &ResolvedPath) -> Result<Vec<u8>> {
        read_file(path)
    }

    fn write(&self, path: &ResolvedPath, bytes: &[u8], append: bool) -> Result<()> {
        write_file(path, bytes, append)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    FileReader::read_to_end(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
}

pub(crate) fn write_file(path: &Path, data: &[u8], append: bool) -> Result<()> {
    FileWriter::write_all(path, data, append)
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
    log::debug!("wrote {} bytes to {} (append: {append})", data.len(), path.display());
    Ok(())
}

pub(crate) fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| InfrastructureError::fs("create_dir_all", path, err))?;
    Ok(())
}

/// Metadata of `path`, which must be a regular file.
pub(crate) fn require_file(path: &Path) -> Result<fs::Metadata> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta),
        _ => Err(InfrastructureError::NotFound { what: "File", path: path.to_path_buf() }.into()),
    }
}

pub(crate) fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(InfrastructureError::NotFound { what: "Directory", path: path.to_path_buf() }.into())
    }
}
