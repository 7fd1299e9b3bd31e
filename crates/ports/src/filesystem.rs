// crates/ports/src/filesystem.rs
use filekit_domain::ResolvedPath;
use filekit_shared_kernel::Result;

/// Port for whole-file access on resolved paths.
pub trait FileSystem: Send + Sync {
    fn file_exists(&self, path: &ResolvedPath) -> bool;
    fn dir_exists(&self, path: &ResolvedPath) -> bool;
    /// Creates `path` and every missing ancestor; succeeds when it already exists.
    fn create_dir_all(&self, path: &ResolvedPath) -> Result<()>;
    fn read(&self, path: &ResolvedPath) -> Result<Vec<u8>>;
    /// Appends at end of file when `append` is set, otherwise truncates.
    fn write(&self, path: &ResolvedPath, bytes: &[u8], append: bool) -> Result<()>;
}
