// crates/infra/src/walker.rs
//! Directory enumeration and whole-tree operations.
//!
//! Walks are iterative `walkdir` traversals that follow symlinks and cut
//! cycles. Entries are sorted by name within each directory, files before
//! subdirectories.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use filekit_shared_kernel::{DomainError, InfrastructureError, Listing, Result, TreeReport, path::join_slash};
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::filesystem::require_dir;

/// Filter for [`DirectoryWalker::list_nodes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Regular expression matched against entry names; empty matches all.
    pub pattern: String,
    pub files: bool,
    pub directories: bool,
    pub recursive: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { pattern: String::new(), files: true, directories: true, recursive: false }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryWalker;

impl DirectoryWalker {
    pub fn new() -> Self {
        Self
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    pub fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    pub fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Files under `dir` whose extension matches `extension`.
    ///
    /// Reported paths are `display_root` joined with `/` separated segments.
    /// Subdirectories that cannot be read are skipped.
    pub fn list_files(&self, dir: &Path, display_root: &str, extension: &str, recursive: bool) -> Result<Listing> {
        require_dir(dir)?;
        let mut listing = Listing::default();
        for entry in walk(dir, recursive) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    skip_or_fail(err, dir)?;
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let name = entry_name(&entry);
            if matches_extension(&name, extension) {
                let display = join_slash(display_root, &relative_slash(dir, entry.path()));
                listing.push(name, display);
            }
        }
        Ok(listing)
    }

    /// Immediate subdirectories of `dir` whose name ends with `suffix`.
    pub fn list_directories(&self, dir: &Path, display_root: &str, suffix: &str) -> Result<Listing> {
        require_dir(dir)?;
        let mut listing = Listing::default();
        for entry in walk(dir, false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    skip_or_fail(err, dir)?;
                    continue;
                }
            };
            let name = entry_name(&entry);
            if entry.file_type().is_dir() && name.ends_with(suffix) {
                let display = join_slash(display_root, &name);
                listing.push(name, display);
            }
        }
        Ok(listing)
    }

    /// Entries whose name matches `options.pattern`, reported with absolute paths.
    pub fn list_nodes(&self, dir: &Path, options: &ListOptions) -> Result<Listing> {
        require_dir(dir)?;
        let filter = if options.pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&options.pattern).map_err(|err| DomainError::InvalidPattern {
                pattern: options.pattern.clone(),
                details: err.to_string(),
                source: Some(Box::new(err)),
            })?)
        };

        let mut listing = Listing::default();
        for entry in walk(dir, options.recursive) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    skip_or_fail(err, dir)?;
                    continue;
                }
            };
            let wanted = if entry.file_type().is_dir() { options.directories } else { options.files };
            let name = entry_name(&entry);
            if wanted && filter.as_ref().is_none_or(|re| re.is_match(&name)) {
                listing.push(name, entry.path().to_string_lossy().into_owned());
            }
        }
        Ok(listing)
    }

    /// Creates `path` with all missing ancestors. Succeeds when it already exists.
    pub fn create_directory_tree(&self, path: &Path) -> Result<()> {
        crate::filesystem::create_dir_all(path)?;
        log::debug!("created directory tree {}", path.display());
        Ok(())
    }

    /// Removes `path` and everything below it. Succeeds when it is already absent.
    pub fn remove_directory_recursive(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        if !path.is_dir() {
            return Err(DomainError::invalid_argument(format!("'{}' is not a directory", path.display())).into());
        }
        fs::remove_dir_all(path).map_err(|err| InfrastructureError::fs("remove_dir_all", path, err))?;
        log::debug!("removed directory tree {}", path.display());
        Ok(())
    }

    /// Copies the tree at `src` into `dst`, replacing existing files.
    ///
    /// `Err` only when the copy cannot start. Entry failures land in the
    /// report; entries copied before or after a failure stay in place.
    pub fn copy_directory(&self, src: &Path, dst: &Path) -> Result<TreeReport> {
        check_tree_transfer(src, dst)?;
        let report = copy_tree(src, dst);
        log::debug!(
            "copied {} files from {} to {} ({} failures)",
            report.files_transferred,
            src.display(),
            dst.display(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Moves the tree at `src` to `dst`: a rename when possible, otherwise a
    /// copy followed by removal of `src` once every entry was copied.
    pub fn move_directory(&self, src: &Path, dst: &Path) -> Result<TreeReport> {
        check_tree_transfer(src, dst)?;
        if !dst.exists() {
            if let Some(parent) = dst.parent() {
                crate::filesystem::create_dir_all(parent)?;
            }
            if fs::rename(src, dst).is_ok() {
                let report = TreeReport { files_transferred: count_files(dst), ..TreeReport::default() };
                log::debug!("renamed directory {} to {}", src.display(), dst.display());
                return Ok(report);
            }
        }

        let mut report = copy_tree(src, dst);
        if report.is_complete() {
            if let Err(err) = fs::remove_dir_all(src) {
                report.record_failure(src, err);
            }
        } else {
            log::warn!("keeping {} after {} failed entries", src.display(), report.failures.len());
        }
        Ok(report)
    }
}

/// Walk below `root`, one level deep unless `recursive`.
fn walk(root: &Path, recursive: bool) -> WalkDir {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .follow_links(true)
        .sort_by(files_then_directories)
}

fn files_then_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    sorts_as_dir(a).cmp(&sorts_as_dir(b)).then_with(|| a.file_name().cmp(b.file_name()))
}

/// Siblings are sorted before links are followed, so a link counts by its target.
fn sorts_as_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

fn relative_slash(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().map(|c| c.as_os_str().to_string_lossy()).collect::<Vec<_>>().join("/")
}

/// A walk error is fatal only when `root` itself cannot be read. Cycles are
/// cut silently; other unreadable entries are skipped with a warning.
fn skip_or_fail(err: walkdir::Error, root: &Path) -> Result<()> {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    if err.loop_ancestor().is_some() {
        log::debug!("not following cycle at {}", path.display());
        return Ok(());
    }
    if err.depth() == 0 {
        return Err(InfrastructureError::fs("read_dir", path, err.into()).into());
    }
    log::warn!("skipping unreadable entry {}: {err}", path.display());
    Ok(())
}

fn check_tree_transfer(src: &Path, dst: &Path) -> Result<()> {
    require_dir(src)?;
    if dst.starts_with(src) {
        return Err(DomainError::invalid_argument(format!(
            "destination '{}' lies inside source '{}'",
            dst.display(),
            src.display()
        ))
        .into());
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> TreeReport {
    let mut report = TreeReport::default();
    if !dst.is_dir() {
        if let Err(err) = fs::create_dir_all(dst) {
            report.record_failure(dst, err);
            return report;
        }
        report.directories_created += 1;
    }

    let mut entries = walk(src, true).into_iter();
    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => continue,
            Err(err) => {
                let path: PathBuf = err.path().map_or_else(|| src.to_path_buf(), Path::to_path_buf);
                log::warn!("failed to read {}: {err}", path.display());
                report.record_failure(path, err);
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            if target.is_dir() {
                continue;
            }
            if let Err(err) = fs::create_dir_all(&target) {
                report.record_failure(&target, err);
                entries.skip_current_dir();
                continue;
            }
            report.directories_created += 1;
        } else if let Err(err) = fs::copy(entry.path(), &target) {
            log::warn!("failed to copy {}: {err}", entry.path().display());
            report.record_failure(entry.path(), err);
        } else {
            report.files_transferred += 1;
        }
    }
    report
}

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .count()
}

/// ASCII case-insensitive extension match; a leading `.` is ignored and an
/// empty extension matches everything.
fn matches_extension(name: &str, extension: &str) -> bool {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    if extension.is_empty() {
        return true;
    }
    name.len() > extension.len() + 1 && {
        let (stem, tail) = name.split_at(name.len() - extension.len());
        stem.ends_with('.') && tail.eq_ignore_ascii_case(extension)
    }
}
