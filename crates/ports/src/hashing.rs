// crates/ports/src/hashing.rs
use filekit_domain::ResolvedPath;
pub use filekit_shared_kernel::HashValue;
use filekit_shared_kernel::Result;

pub trait ContentHasher: Send + Sync {
    fn hash_bytes(&self, data: &[u8]) -> HashValue;
    /// Streams the file; never loads it whole.
    fn hash_file(&self, path: &ResolvedPath) -> Result<HashValue>;
}
