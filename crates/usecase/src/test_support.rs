use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::Mutex,
};

use filekit_domain::ResolvedPath;
use filekit_ports::FileSystem;
use filekit_shared_kernel::{InfrastructureError, Result};

/// In-memory file system recording every mutation.
#[derive(Default)]
pub struct StubFileSystem {
    pub files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    pub dirs: Mutex<BTreeSet<PathBuf>>,
    pub fail_writes: bool,
    pub fail_mkdir: bool,
}

impl StubFileSystem {
    pub fn with_dir(path: impl AsRef<Path>) -> Self {
        let stub = Self::default();
        stub.dirs.lock().unwrap().insert(path.as_ref().to_path_buf());
        stub
    }

    pub fn with_file(self, path: impl AsRef<Path>, bytes: &[u8]) -> Self {
        self.files.lock().unwrap().insert(path.as_ref().to_path_buf(), bytes.to_vec());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl FileSystem for StubFileSystem {
    fn file_exists(&self, path: &ResolvedPath) -> bool {
        self.files.lock().unwrap().contains_key(path.as_path())
    }

    fn dir_exists(&self, path: &ResolvedPath) -> bool {
        self.dirs.lock().unwrap().contains(path.as_path())
    }

    fn create_dir_all(&self, path: &ResolvedPath) -> Result<()> {
        if self.fail_mkdir {
            return Err(InfrastructureError::fs(
                "create_dir_all",
                path.as_path(),
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            )
            .into());
        }
        self.dirs.lock().unwrap().insert(path.as_path().to_path_buf());
        Ok(())
    }

    fn read(&self, path: &ResolvedPath) -> Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| {
            InfrastructureError::FileRead {
                path: path.as_path().to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .into()
        })
    }

    fn write(&self, path: &ResolvedPath, bytes: &[u8], append: bool) -> Result<()> {
        if self.fail_writes {
            return Err(InfrastructureError::FileWrite {
                path: path.as_path().to_path_buf(),
                source: std::io::Error::other("disk full"),
            }
            .into());
        }
        let mut files = self.files.lock().unwrap();
        let entry = files.entry(path.as_path().to_path_buf()).or_default();
        if !append {
            entry.clear();
        }
        entry.extend_from_slice(bytes);
        Ok(())
    }
}
