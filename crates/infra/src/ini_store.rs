// crates/infra/src/ini_store.rs
use std::{fs, path::Path};

use filekit_domain::{ConfigValue, IniDocument, LineTerminator, ValueType};
use filekit_shared_kernel::{ErrorContext, InfrastructureError, Result};
use fs2::FileExt;

use crate::persistence::FileWriter;

/// Typed INI values persisted in plain files.
///
/// Every write replaces the whole file atomically while holding an
/// exclusive `<file>.lock` sibling.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniStore {
    line_terminator: LineTerminator,
}

impl IniStore {
    pub fn new(line_terminator: LineTerminator) -> Self {
        Self { line_terminator }
    }

    pub fn load(&self, path: &Path) -> Result<IniDocument> {
        if !path.is_file() {
            return Err(InfrastructureError::NotFound { what: "Config file", path: path.to_path_buf() }.into());
        }
        let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(IniDocument::parse(text.strip_prefix('\u{feff}').unwrap_or(&text)))
    }

    pub fn read_config(
        &self,
        path: &Path,
        section: &str,
        key: &str,
        ty: ValueType,
        single_line_array: bool,
    ) -> Result<ConfigValue> {
        let doc = self.load(path)?;
        doc.read(section, key, ty, single_line_array)
            .with_context(|| format!("reading {}", path.display()))?
            .ok_or_else(|| InfrastructureError::NotFound { what: "Config key", path: path.join(format!("[{section}]{key}")) }.into())
    }

    /// Creates the file when missing; its directory must exist.
    pub fn write_config(
        &self,
        path: &Path,
        section: &str,
        key: &str,
        value: &ConfigValue,
        single_line_array: bool,
    ) -> Result<()> {
        self.with_lock(path, |doc| {
            doc.write(section, key, value, single_line_array);
            true
        })?;
        log::debug!("wrote [{section}] {key} to {}", path.display());
        Ok(())
    }

    /// Returns whether the key was present.
    pub fn remove_config(&self, path: &Path, section: &str, key: &str) -> Result<bool> {
        if !path.is_file() {
            return Ok(false);
        }
        let removed = self.with_lock(path, |doc| doc.remove(section, key))?;
        if removed {
            log::debug!("removed [{section}] {key} from {}", path.display());
        }
        Ok(removed)
    }

    /// Loads, edits and persists the document under the lock. `edit` reports
    /// whether the document changed; unchanged documents are not rewritten.
    fn with_lock<F>(&self, path: &Path, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut IniDocument) -> bool,
    {
        let lock_path = lock_path_for(path);
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|err| InfrastructureError::FileWrite { path: lock_path.clone(), source: err })?;
        lock_file
            .lock_exclusive()
            .map_err(|err| InfrastructureError::FileWrite { path: lock_path.clone(), source: err })?;

        let result = (|| -> Result<bool> {
            let mut doc = if path.is_file() { self.load(path)? } else { IniDocument::default() };
            let changed = edit(&mut doc);
            if changed {
                FileWriter::atomic_write(path, doc.render(self.line_terminator.as_str()).as_bytes())
                    .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
            }
            Ok(changed)
        })();

        let _ = lock_file.unlock();
        let _ = fs::remove_file(&lock_path);
        result
    }
}

fn lock_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}
