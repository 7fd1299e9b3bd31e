use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One output part of a split, ordered by its index in the split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDescriptor {
    pub absolute_path: PathBuf,
    pub size_bytes: u64,
}

impl ChunkDescriptor {
    pub fn new(absolute_path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self { absolute_path: absolute_path.into(), size_bytes }
    }
}
