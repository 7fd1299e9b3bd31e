//! File level operations on resolved paths: bytes, text, lines, tables,
//! stat and flags, timestamps, and delete/copy/move/rename.

use std::{fs, path::Path, time::SystemTime};

use filekit_domain::{CsvTable, FileKitConfig, LineTerminator, naming::require_plain_name};
use filekit_shared_kernel::{
    DomainError, ErrorContext, FileStat, InfrastructureError, MIN_TIMESTAMP, Result, Timestamp,
};
use filetime::FileTime;
use regex::Regex;

use crate::{
    filesystem::{read_file, require_file, write_file},
    persistence::FileWriter,
};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore {
    line_terminator: LineTerminator,
}

impl FileStore {
    pub fn new(line_terminator: LineTerminator) -> Self {
        Self { line_terminator }
    }

    pub fn from_config(config: &FileKitConfig) -> Self {
        Self::new(config.line_terminator)
    }

    pub fn line_terminator(&self) -> &'static str {
        self.line_terminator.as_str()
    }

    pub fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        read_file(path)
    }

    /// Missing parent directories are not created.
    pub fn write_bytes(&self, path: &Path, bytes: &[u8], append: bool) -> Result<()> {
        write_file(path, bytes, append)
    }

    /// UTF-8 contents with a leading byte order mark removed.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = read_file(path)?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        std::str::from_utf8(body).map(str::to_owned).map_err(|err| {
            InfrastructureError::Decode { format: "UTF-8 text".into(), details: format!("{}: {err}", path.display()) }
                .into()
        })
    }

    pub fn write_text(&self, path: &Path, text: &str, append: bool) -> Result<()> {
        write_file(path, text.as_bytes(), append)
    }

    /// Lines split on `\n` or `\r\n`, keeping those matched by `pattern`.
    /// An empty pattern keeps every line.
    pub fn read_lines(&self, path: &Path, pattern: &str) -> Result<Vec<String>> {
        let filter = compile_filter(pattern)?;
        let text = self.read_text(path)?;
        Ok(text
            .lines()
            .filter(|line| filter.as_ref().is_none_or(|re| re.is_match(line)))
            .map(str::to_owned)
            .collect())
    }

    /// Lines `[start, end)`; `end = None` reads to the last line. Bounds clamp.
    pub fn read_line_range(&self, path: &Path, start: usize, end: Option<usize>) -> Result<Vec<String>> {
        let text = self.read_text(path)?;
        let take = end.map_or(usize::MAX, |end| end.saturating_sub(start));
        Ok(text.lines().skip(start).take(take).map(str::to_owned).collect())
    }

    /// Writes each line followed by the configured terminator.
    pub fn write_lines<S: AsRef<str>>(&self, path: &Path, lines: &[S], append: bool) -> Result<()> {
        let terminator = self.line_terminator();
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push_str(terminator);
        }
        write_file(path, text.as_bytes(), append)
    }

    pub fn read_csv(&self, path: &Path, header_first: bool) -> Result<CsvTable> {
        let text = self.read_text(path)?;
        CsvTable::parse(&text, header_first).with_context(|| format!("reading {}", path.display()))
    }

    pub fn save_csv(&self, path: &Path, table: &CsvTable, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            return Err(InfrastructureError::AlreadyExists { path: path.to_path_buf() }.into());
        }
        write_file(path, table.render(self.line_terminator()).as_bytes(), false)
    }

    /// Fresh snapshot; times the platform cannot report hold [`MIN_TIMESTAMP`].
    pub fn stat(&self, path: &Path) -> Result<FileStat> {
        let meta = fs::metadata(path).map_err(|err| InfrastructureError::fs("stat", path, err))?;
        Ok(FileStat {
            is_directory: meta.is_dir(),
            is_read_only: meta.permissions().readonly(),
            last_access_time: to_timestamp(meta.accessed()),
            creation_time: to_timestamp(meta.created()),
            modification_time: to_timestamp(meta.modified()),
            size_bytes: i64::try_from(meta.len()).unwrap_or(i64::MAX),
        })
    }

    pub fn is_read_only(&self, path: &Path) -> Result<bool> {
        let meta = fs::metadata(path).map_err(|err| InfrastructureError::fs("stat", path, err))?;
        Ok(meta.permissions().readonly())
    }

    /// On Unix, setting clears every write bit and clearing restores owner write only.
    pub fn set_read_only(&self, path: &Path, read_only: bool) -> Result<()> {
        let meta = fs::metadata(path).map_err(|err| InfrastructureError::fs("stat", path, err))?;
        let permissions = with_read_only(meta.permissions(), read_only);
        fs::set_permissions(path, permissions).map_err(|err| InfrastructureError::fs("set_permissions", path, err))?;
        log::debug!("set read-only={read_only} on {}", path.display());
        Ok(())
    }

    /// Size of a regular file in bytes.
    pub fn file_size(&self, path: &Path) -> Result<i64> {
        let meta = require_file(path)?;
        Ok(i64::try_from(meta.len()).unwrap_or(i64::MAX))
    }

    pub fn modification_time(&self, path: &Path) -> Result<Timestamp> {
        let meta = fs::metadata(path).map_err(|err| InfrastructureError::fs("stat", path, err))?;
        meta.modified().map(Timestamp::from).map_err(|err| InfrastructureError::fs("modified", path, err).into())
    }

    pub fn access_time(&self, path: &Path) -> Result<Timestamp> {
        let meta = fs::metadata(path).map_err(|err| InfrastructureError::fs("stat", path, err))?;
        meta.accessed().map(Timestamp::from).map_err(|err| InfrastructureError::fs("accessed", path, err).into())
    }

    pub fn set_modification_time(&self, path: &Path, time: Timestamp) -> Result<()> {
        if time == MIN_TIMESTAMP {
            return Err(DomainError::invalid_argument("timestamp is unset").into());
        }
        if !path.exists() {
            return Err(InfrastructureError::NotFound { what: "Path", path: path.to_path_buf() }.into());
        }
        let mtime = FileTime::from_unix_time(time.timestamp(), time.timestamp_subsec_nanos());
        filetime::set_file_mtime(path, mtime).map_err(|err| InfrastructureError::fs("set_file_mtime", path, err))?;
        log::debug!("set modification time of {} to {time}", path.display());
        Ok(())
    }

    pub fn delete_file(&self, path: &Path) -> Result<()> {
        require_file(path)?;
        fs::remove_file(path).map_err(|err| InfrastructureError::fs("remove_file", path, err))?;
        log::debug!("deleted {}", path.display());
        Ok(())
    }

    /// Copies a regular file. An existing destination is replaced only with `overwrite`.
    pub fn copy_file(&self, src: &Path, dst: &Path, overwrite: bool) -> Result<()> {
        check_transfer(src, dst, overwrite)?;
        FileWriter::atomic_copy(src, dst).map_err(|err| InfrastructureError::fs("copy", dst, err))?;
        log::debug!("copied {} to {}", src.display(), dst.display());
        Ok(())
    }

    /// Renames when possible, otherwise copies and removes the source.
    /// An existing destination is only replaced once the new contents are complete.
    pub fn move_file(&self, src: &Path, dst: &Path, overwrite: bool) -> Result<()> {
        check_transfer(src, dst, overwrite)?;
        if let Err(err) = fs::rename(src, dst) {
            log::debug!("rename {} failed ({err}), falling back to copy", src.display());
            FileWriter::atomic_copy(src, dst).map_err(|err| InfrastructureError::fs("copy", dst, err))?;
            fs::remove_file(src).map_err(|err| InfrastructureError::fs("remove_file", src, err))?;
        }
        log::debug!("moved {} to {}", src.display(), dst.display());
        Ok(())
    }

    /// Renames within the same directory. Never replaces an existing entry.
    pub fn rename_file(&self, path: &Path, new_name: &str) -> Result<std::path::PathBuf> {
        let new_name = require_plain_name(new_name)?;
        if !path.exists() {
            return Err(InfrastructureError::NotFound { what: "Path", path: path.to_path_buf() }.into());
        }
        let target = path.with_file_name(new_name);
        if target.exists() {
            return Err(InfrastructureError::AlreadyExists { path: target }.into());
        }
        fs::rename(path, &target).map_err(|err| InfrastructureError::fs("rename", path, err))?;
        log::debug!("renamed {} to {}", path.display(), target.display());
        Ok(target)
    }
}

#[cfg(unix)]
fn with_read_only(mut permissions: fs::Permissions, read_only: bool) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    let mode = permissions.mode();
    permissions.set_mode(if read_only { mode & !0o222 } else { mode | 0o200 });
    permissions
}

#[cfg(not(unix))]
fn with_read_only(mut permissions: fs::Permissions, read_only: bool) -> fs::Permissions {
    permissions.set_readonly(read_only);
    permissions
}

fn compile_filter(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern).map(Some).map_err(|err| {
        DomainError::InvalidPattern { pattern: pattern.to_string(), details: err.to_string(), source: Some(Box::new(err)) }
            .into()
    })
}

fn check_transfer(src: &Path, dst: &Path, overwrite: bool) -> Result<()> {
    require_file(src)?;
    if src == dst {
        return Err(DomainError::invalid_argument("source and destination are the same file").into());
    }
    if dst.exists() && !overwrite {
        return Err(InfrastructureError::AlreadyExists { path: dst.to_path_buf() }.into());
    }
    Ok(())
}

fn to_timestamp(time: std::io::Result<SystemTime>) -> Timestamp {
    time.map(Timestamp::from).unwrap_or(MIN_TIMESTAMP)
}
