use filekit_domain::PathSpec;
use filekit_infra::ListOptions;
use filekit_shared_kernel::{FileKitError, InfrastructureError, Listing, Outcome, Result, TreeReport};

use super::{FileHelper, report_default};

impl FileHelper {
    pub fn exists(&self, path: &PathSpec) -> bool {
        !path.is_empty() && self.walker.exists(&self.resolve(path))
    }

    pub fn is_directory(&self, path: &PathSpec) -> bool {
        self.directory(path).is_ok_and(|p| self.walker.is_directory(&p))
    }

    pub fn is_file(&self, path: &PathSpec) -> bool {
        !path.is_empty() && self.walker.is_file(&self.resolve(path))
    }

    /// Files matching `extension`, recursively when asked. Paths are the raw
    /// directory argument joined with `/` separated relative segments.
    pub fn list_files(&self, dir: &PathSpec, extension: &str, recursive: bool) -> Outcome<Listing> {
        let result = self.directory(dir).and_then(|p| self.walker.list_files(&p, &dir.raw, extension, recursive));
        report_default("list_files", result)
    }

    /// Immediate subdirectories whose name ends with `suffix`.
    pub fn list_directories(&self, dir: &PathSpec, suffix: &str) -> Outcome<Listing> {
        let result = self.directory(dir).and_then(|p| self.walker.list_directories(&p, &dir.raw, suffix));
        report_default("list_directories", result)
    }

    /// Entries matching `options`, reported with absolute paths.
    pub fn list_nodes(&self, dir: &PathSpec, options: &ListOptions) -> Outcome<Listing> {
        report_default("list_nodes", self.directory(dir).and_then(|p| self.walker.list_nodes(&p, options)))
    }

    pub fn create_directory_tree(&self, path: &PathSpec) -> Outcome<()> {
        report_default("create_directory_tree", self.target(path).and_then(|p| self.walker.create_directory_tree(&p)))
    }

    pub fn remove_directory_recursive(&self, path: &PathSpec) -> Outcome<()> {
        report_default(
            "remove_directory_recursive",
            self.target(path).and_then(|p| self.walker.remove_directory_recursive(&p)),
        )
    }

    /// Recursive copy with no rollback. On failure the value still reports
    /// what was copied and which entries failed.
    pub fn copy_directory(&self, src: &PathSpec, dst: &PathSpec) -> Outcome<TreeReport> {
        let result = self.target(src).and_then(|s| {
            let d = self.target(dst)?;
            self.walker.copy_directory(&s, &d).map(|report| (s, report))
        });
        tree_outcome("copy_directory", result)
    }

    /// Rename when possible, else copy and remove the source once every entry
    /// was copied. Partial copies are not rolled back.
    pub fn move_directory(&self, src: &PathSpec, dst: &PathSpec) -> Outcome<TreeReport> {
        let result = self.target(src).and_then(|s| {
            let d = self.target(dst)?;
            self.walker.move_directory(&s, &d).map(|report| (s, report))
        });
        tree_outcome("move_directory", result)
    }
}

fn tree_outcome<P: AsRef<std::path::Path>>(operation: &str, result: Result<(P, TreeReport)>) -> Outcome<TreeReport> {
    match result {
        Ok((_, report)) if report.is_complete() => Outcome::success(report),
        Ok((src, report)) => {
            let err: FileKitError = InfrastructureError::PartialFailure {
                operation: operation.to_string(),
                path: src.as_ref().to_path_buf(),
                failed: report.failures.len(),
            }
            .into();
            log::warn!("{operation} failed: {err}");
            Outcome::failure(report, &err)
        }
        Err(err) => report_default(operation, Err(err)),
    }
}
