use filekit_domain::{ConfigValue, PathSpec, ValueType};
use filekit_shared_kernel::Outcome;

use super::{FileHelper, report_default};

impl FileHelper {
    /// Typed value of `key` in `section`; `None` on failure.
    ///
    /// `single_line_array` selects the `Key=(a,b)` form over repeated `+Key=` lines.
    pub fn read_config(
        &self,
        path: &PathSpec,
        section: &str,
        key: &str,
        ty: ValueType,
        single_line_array: bool,
    ) -> Outcome<Option<ConfigValue>> {
        let result =
            self.target(path).and_then(|p| self.ini.read_config(&p, section, key, ty, single_line_array)).map(Some);
        report_default("read_config", result)
    }

    pub fn write_config(
        &self,
        path: &PathSpec,
        section: &str,
        key: &str,
        value: &ConfigValue,
        single_line_array: bool,
    ) -> Outcome<()> {
        let result = self.target(path).and_then(|p| self.ini.write_config(&p, section, key, value, single_line_array));
        report_default("write_config", result)
    }

    /// Succeeds with `false` when there was nothing to remove.
    pub fn remove_config(&self, path: &PathSpec, section: &str, key: &str) -> Outcome<bool> {
        report_default("remove_config", self.target(path).and_then(|p| self.ini.remove_config(&p, section, key)))
    }
}
