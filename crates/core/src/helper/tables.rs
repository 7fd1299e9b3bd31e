use filekit_domain::{CsvTable, PathSpec};
use filekit_shared_kernel::Outcome;

use super::{FileHelper, report_default};

impl FileHelper {
    /// Parses CSV text; with `header_first` the first record becomes the headers.
    pub fn string_to_csv(&self, content: &str, header_first: bool) -> Outcome<CsvTable> {
        report_default("string_to_csv", CsvTable::parse(content, header_first).map_err(Into::into))
    }

    pub fn csv_to_string(&self, table: &CsvTable) -> String {
        table.render(self.store.line_terminator())
    }

    pub fn read_csv(&self, path: &PathSpec, header_first: bool) -> Outcome<CsvTable> {
        report_default("read_csv", self.target(path).and_then(|p| self.store.read_csv(&p, header_first)))
    }

    pub fn save_csv(&self, path: &PathSpec, table: &CsvTable, overwrite: bool) -> Outcome<()> {
        report_default("save_csv", self.target(path).and_then(|p| self.store.save_csv(&p, table, overwrite)))
    }
}
