// crates/infra/src/chunking.rs
use std::{
    io::{BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use filekit_shared_kernel::{ChunkDescriptor, DomainError, InfrastructureError, Result};

use crate::{
    filesystem::{create_dir_all, require_file},
    persistence::{FileReader, FileWriter},
};

const DEFAULT_BUFFER: usize = 64 * 1024;

/// Splits files into contiguous parts and joins them back.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSplitter {
    buffer_size: usize,
}

impl Default for ChunkSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER)
    }
}

/// Byte layout of a split: `count - 1` parts of `part_size`, the last one larger.
fn part_sizes(total: u64, count: u64) -> impl Iterator<Item = (u64, u64)> {
    let part_size = total / count;
    (0..count).map(move |idx| {
        let offset = idx * part_size;
        let len = if idx + 1 == count { total - offset } else { part_size };
        (offset, len)
    })
}

fn check_subfolder(subfolder: &str) -> Result<()> {
    let escapes = Path::new(subfolder).components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(DomainError::invalid_argument(format!("subfolder '{subfolder}' leaves the source directory")).into());
    }
    Ok(())
}

impl ChunkSplitter {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size: buffer_size.max(1) }
    }

    /// Writes `<file name>_part<i>` files next to `path`, or inside `subfolder`
    /// under the source directory when it is non-empty.
    ///
    /// `subfolder` must stay below the source directory: no root, prefix or
    /// `..` components. `part_count` below 1 counts as 1. Nothing is written when the file has
    /// no more bytes than parts. A failed write aborts the split and keeps the
    /// parts already written.
    pub fn split(&self, path: &Path, subfolder: &str, part_count: i32) -> Result<Vec<ChunkDescriptor>> {
        let meta = require_file(path)?;
        check_subfolder(subfolder)?;
        let total = meta.len();
        let count = u64::try_from(part_count.max(1)).unwrap_or(1);
        if total <= count {
            return Err(DomainError::invalid_argument(format!(
                "{} has {total} bytes, not enough for {count} non-empty parts",
                path.display()
            ))
            .into());
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| DomainError::invalid_argument(format!("{} has no file name", path.display())))?;
        let source_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let out_dir = if subfolder.is_empty() { source_dir } else { source_dir.join(subfolder) };
        create_dir_all(&out_dir)?;

        let mut source =
            FileReader::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let mut parts = Vec::new();
        for (idx, (offset, len)) in part_sizes(total, count).enumerate() {
            let part_path = out_dir.join(format!("{file_name}_part{idx}"));
            let write_err = |source| InfrastructureError::FileWrite { path: part_path.clone(), source };
            let mut out = BufWriter::with_capacity(self.buffer_size, FileWriter::open(&part_path, false).map_err(write_err)?);
            FileReader::copy_range(&mut source, offset, len, &mut out).map_err(write_err)?;
            out.flush().map_err(write_err)?;
            parts.push(ChunkDescriptor::new(part_path, len));
        }
        log::debug!("split {} into {} parts under {}", path.display(), parts.len(), out_dir.display());
        Ok(parts)
    }

    /// Concatenates `parts` in order into `destination`, returning the byte count.
    pub fn join(&self, parts: &[PathBuf], destination: &Path, overwrite: bool) -> Result<u64> {
        if parts.is_empty() {
            return Err(DomainError::invalid_argument("no parts to join").into());
        }
        for part in parts {
            require_file(part)?;
            if part == destination {
                return Err(DomainError::invalid_argument("destination is one of the parts").into());
            }
        }
        if destination.exists() && !overwrite {
            return Err(InfrastructureError::AlreadyExists { path: destination.to_path_buf() }.into());
        }

        let write_err = |source| InfrastructureError::FileWrite { path: destination.to_path_buf(), source };
        let mut out = BufWriter::with_capacity(self.buffer_size, FileWriter::open(destination, false).map_err(write_err)?);
        let mut written = 0;
        for part in parts {
            let mut input = FileReader::open_buffered(part, self.buffer_size)
                .map_err(|source| InfrastructureError::FileRead { path: part.clone(), source })?;
            written += std::io::copy(&mut input, &mut out).map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;
        log::debug!("joined {} parts into {}", parts.len(), destination.display());
        Ok(written)
    }
}
