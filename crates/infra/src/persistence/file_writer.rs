// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Open `path` for writing: at end of file when `append`, truncated otherwise.
    pub fn open(path: &Path, append: bool) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        options.open(path)
    }

    pub fn write_all(path: &Path, data: &[u8], append: bool) -> std::io::Result<()> {
        let mut w = BufWriter::new(Self::open(path, append)?);
        w.write_all(data)?;
        w.flush()
    }

    /// Atomically replace `path` with `data` via a temp file and rename.
    pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        Self::atomic_replace(path, |w| w.write_all(data))
    }

    /// Atomically replace `dst` with a copy of `src`. On failure `dst` is untouched.
    pub fn atomic_copy(src: &Path, dst: &Path) -> std::io::Result<u64> {
        let mut input = File::open(src)?;
        let permissions = input.metadata()?.permissions();
        let mut copied = 0;
        Self::atomic_replace(dst, |w| {
            copied = std::io::copy(&mut input, w)?;
            w.get_ref().set_permissions(permissions)
        })?;
        Ok(copied)
    }

    /// Fills a temp sibling of `path` and renames it over `path`. The temp
    /// file is removed when any step fails.
    fn atomic_replace<F>(path: &Path, fill: F) -> std::io::Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = (|| -> std::io::Result<()> {
            let mut w = BufWriter::new(File::create(&tmp)?);
            fill(&mut w)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
