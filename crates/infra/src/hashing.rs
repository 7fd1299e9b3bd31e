// crates/infra/src/hashing.rs
use std::{io::Read, path::Path};

use filekit_domain::ResolvedPath;
use filekit_ports::{ContentHasher, HashValue};
use filekit_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

const DEFAULT_BUFFER: usize = 64 * 1024;

/// MD5 digests, used for file identity only.
#[derive(Debug, Clone, Copy)]
pub struct Md5Hasher {
    buffer_size: usize,
}

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER)
    }
}

impl Md5Hasher {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size: buffer_size.max(1) }
    }

    pub fn hash_path(&self, path: &Path) -> Result<HashValue> {
        let read_err = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };
        let mut reader = FileReader::open_buffered(path, self.buffer_size).map_err(read_err)?;
        let mut context = md5::Context::new();
        let mut buf = vec![0u8; self.buffer_size];
        loop {
            let n = reader.read(&mut buf).map_err(read_err)?;
            if n == 0 {
                break;
            }
            context.consume(&buf[..n]);
        }
        Ok(HashValue::from_bytes(context.compute().0))
    }
}

impl ContentHasher for Md5Hasher {
    fn hash_bytes(&self, data: &[u8]) -> HashValue {
        HashValue::from_bytes(md5::compute(data).0)
    }

    fn hash_file(&self, path: &ResolvedPath) -> Result<HashValue> {
        self.hash_path(path)
    }
}

#[cfg(test)]
mod tests {
    use filekit_shared_kernel::ErrorKind;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn digests_match_reference_values() {
        let hasher = Md5Hasher::default();
        assert_eq!(hasher.hash_bytes(b"").to_string(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hasher.hash_bytes(b"abc").to_string(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn streamed_file_digest_equals_in_memory_digest() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("data.bin");
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).expect("write");

        // small buffer forces many reads
        let hasher = Md5Hasher::new(7);
        assert_eq!(hasher.hash_file(&ResolvedPath::new(&path)).expect("hash"), hasher.hash_bytes(&data));
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = Md5Hasher::default().hash_path(&tmp.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    proptest! {
        #[test]
        fn flipping_a_byte_changes_the_digest(mut bytes in proptest::collection::vec(any::<u8>(), 1..256), idx in any::<prop::sample::Index>()) {
            let hasher = Md5Hasher::default();
            let before = hasher.hash_bytes(&bytes);
            prop_assert_eq!(before, hasher.hash_bytes(&bytes));
            let i = idx.index(bytes.len());
            bytes[i] ^= 0x01;
            prop_assert_ne!(before, hasher.hash_bytes(&bytes));
        }
    }
}
