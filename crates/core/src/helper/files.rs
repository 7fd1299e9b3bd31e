use std::path::PathBuf;

use filekit_domain::{PathSpec, naming::clean_file_name};
use filekit_ports::BinaryCodec;
use filekit_shared_kernel::{FileStat, MIN_TIMESTAMP, Outcome, Result, Timestamp};
use filekit_usecase::{LoadFile, LoadedFile, SaveFile, SaveOptions, SavedFile};

use super::{FileHelper, report, report_default};

/// A file's contents as base64 plus its base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedFile {
    pub base64: String,
    pub file_name: String,
}

impl FileHelper {
    pub fn read_bytes(&self, path: &PathSpec) -> Outcome<Vec<u8>> {
        report_default("read_bytes", self.target(path).and_then(|p| self.store.read_bytes(&p)))
    }

    pub fn write_bytes(&self, path: &PathSpec, bytes: &[u8], append: bool) -> Outcome<()> {
        report_default("write_bytes", self.target(path).and_then(|p| self.store.write_bytes(&p, bytes, append)))
    }

    pub fn read_text(&self, path: &PathSpec) -> Outcome<String> {
        report_default("read_text", self.target(path).and_then(|p| self.store.read_text(&p)))
    }

    pub fn write_text(&self, path: &PathSpec, text: &str, append: bool) -> Outcome<()> {
        report_default("write_text", self.target(path).and_then(|p| self.store.write_text(&p, text, append)))
    }

    /// `pattern` is a regular expression; empty keeps every line.
    pub fn read_lines(&self, path: &PathSpec, pattern: &str) -> Outcome<Vec<String>> {
        report_default("read_lines", self.target(path).and_then(|p| self.store.read_lines(&p, pattern)))
    }

    pub fn write_lines<S: AsRef<str>>(&self, path: &PathSpec, lines: &[S], append: bool) -> Outcome<()> {
        report_default("write_lines", self.target(path).and_then(|p| self.store.write_lines(&p, lines, append)))
    }

    pub fn read_line_range(&self, path: &PathSpec, start: usize, end: Option<usize>) -> Outcome<Vec<String>> {
        report_default("read_line_range", self.target(path).and_then(|p| self.store.read_line_range(&p, start, end)))
    }

    pub fn save_file(&self, path: &PathSpec, create_directories: bool, overwrite: bool, bytes: &[u8]) -> Outcome<SavedFile> {
        let options = SaveOptions { create_directories, overwrite };
        report_default("save_file", SaveFile::new(&self.fs, &self.resolver).run(path, options, bytes))
    }

    pub fn load_file(&self, path: &PathSpec) -> Outcome<LoadedFile> {
        report_default("load_file", LoadFile::new(&self.fs, &self.resolver).run(path))
    }

    /// On failure every timestamp holds the sentinel.
    pub fn stat(&self, path: &PathSpec) -> Outcome<FileStat> {
        report_default("stat", self.target(path).and_then(|p| self.store.stat(&p)))
    }

    pub fn set_read_only(&self, path: &PathSpec, read_only: bool) -> Outcome<()> {
        report_default("set_read_only", self.target(path).and_then(|p| self.store.set_read_only(&p, read_only)))
    }

    pub fn is_read_only(&self, path: &PathSpec) -> Outcome<bool> {
        report_default("is_read_only", self.target(path).and_then(|p| self.store.is_read_only(&p)))
    }

    /// `-1` when the path is not a readable regular file.
    pub fn file_size(&self, path: &PathSpec) -> Outcome<i64> {
        report("file_size", self.target(path).and_then(|p| self.store.file_size(&p)), || -1)
    }

    /// Modification time, [`MIN_TIMESTAMP`] on failure.
    pub fn get_timestamp(&self, path: &PathSpec) -> Outcome<Timestamp> {
        report("get_timestamp", self.target(path).and_then(|p| self.store.modification_time(&p)), || MIN_TIMESTAMP)
    }

    pub fn set_timestamp(&self, path: &PathSpec, time: Timestamp) -> Outcome<()> {
        report_default("set_timestamp", self.target(path).and_then(|p| self.store.set_modification_time(&p, time)))
    }

    pub fn get_access_timestamp(&self, path: &PathSpec) -> Outcome<Timestamp> {
        report("get_access_timestamp", self.target(path).and_then(|p| self.store.access_time(&p)), || MIN_TIMESTAMP)
    }

    pub fn delete_file(&self, path: &PathSpec) -> Outcome<()> {
        report_default("delete_file", self.target(path).and_then(|p| self.store.delete_file(&p)))
    }

    /// Never replaces an existing destination unless `overwrite` is set.
    pub fn copy_file(&self, src: &PathSpec, dst: &PathSpec, overwrite: bool) -> Outcome<()> {
        let result = self.target(src).and_then(|s| {
            let d = self.target(dst)?;
            self.store.copy_file(&s, &d, overwrite)
        });
        report_default("copy_file", result)
    }

    pub fn move_file(&self, src: &PathSpec, dst: &PathSpec, overwrite: bool) -> Outcome<()> {
        let result = self.target(src).and_then(|s| {
            let d = self.target(dst)?;
            self.store.move_file(&s, &d, overwrite)
        });
        report_default("move_file", result)
    }

    /// Renames in place and returns the new path. `new_name` must be a single component.
    pub fn rename_file(&self, path: &PathSpec, new_name: &str) -> Outcome<PathBuf> {
        report_default("rename_file", self.target(path).and_then(|p| self.store.rename_file(&p, new_name)))
    }

    pub fn file_to_base64(&self, path: &PathSpec) -> Outcome<EncodedFile> {
        let result: Result<EncodedFile> = self.target(path).and_then(|p| {
            let bytes = self.store.read_bytes(&p)?;
            Ok(EncodedFile { base64: self.codec.encode(&bytes), file_name: clean_file_name(&path.raw).to_string() })
        });
        report_default("file_to_base64", result)
    }
}
