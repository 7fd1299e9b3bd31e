use filekit_domain::{PathParts, naming};
use filekit_shared_kernel::Outcome;

use super::{FileHelper, report_default};

impl FileHelper {
    pub fn path_parts(&self, path: &str) -> PathParts {
        PathParts::of(path)
    }

    pub fn is_valid_filename(&self, name: &str) -> bool {
        naming::is_valid_filename(name)
    }

    /// `name` with invalid characters replaced by `_`.
    pub fn validate_filename(&self, name: &str) -> Outcome<String> {
        report_default("validate_filename", naming::validate_filename(name).map_err(Into::into))
    }
}
