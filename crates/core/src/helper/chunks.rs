use filekit_domain::PathSpec;
use filekit_shared_kernel::{ChunkDescriptor, Outcome, Result};

use super::{FileHelper, report_default};

impl FileHelper {
    /// Splits into `part_count` parts named `<file>_part<i>`, inside
    /// `subfolder` under the source directory when it is non-empty.
    /// Parts written before a failure are left on disk.
    pub fn split(&self, path: &PathSpec, subfolder: &str, part_count: i32) -> Outcome<Vec<ChunkDescriptor>> {
        report_default("split", self.target(path).and_then(|p| self.splitter.split(&p, subfolder, part_count)))
    }

    /// Concatenates `parts` in order into `destination`; returns the bytes written.
    pub fn join(&self, parts: &[PathSpec], destination: &PathSpec, overwrite: bool) -> Outcome<u64> {
        let result = parts
            .iter()
            .map(|part| self.target(part).map(|p| p.into_path_buf()))
            .collect::<Result<Vec<_>>>()
            .and_then(|parts| {
                let dst = self.target(destination)?;
                self.splitter.join(&parts, &dst, overwrite)
            });
        report_default("join", result)
    }
}
