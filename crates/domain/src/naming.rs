//! File name rules and path splitting on raw (unresolved) strings.

use filekit_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", "LPT1",
    "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];
const MAX_NAME_LEN: usize = 255;

/// Components of a raw path string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParts {
    /// Everything before the last separator, without the separator.
    pub directory: String,
    /// File name without its extension.
    pub base_name: String,
    /// Extension without the leading dot.
    pub extension: String,
    /// File name including the extension.
    pub file_name: String,
}

impl PathParts {
    pub fn of(raw: &str) -> Self {
        let file_name = clean_file_name(raw).to_string();
        let directory = raw[..raw.len() - file_name.len()].trim_end_matches(['/', '\\']).to_string();
        let (base_name, extension) = match file_name.rfind('.') {
            Some(0) | None => (file_name.clone(), String::new()),
            Some(idx) => (file_name[..idx].to_string(), file_name[idx + 1..].to_string()),
        };
        Self { directory, base_name, extension, file_name }
    }
}

/// Last component of `raw`, splitting on both separator styles.
pub fn clean_file_name(raw: &str) -> &str {
    match raw.rfind(['/', '\\']) {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    }
}

pub fn has_extension_separator(name: &str) -> bool {
    name.contains('.')
}

/// Whether `name` can be used as a single path component on every supported platform.
pub fn is_valid_filename(name: &str) -> bool {
    check_filename(name).is_ok()
}

fn check_filename(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name == "." || name == ".." {
        return Err("name is a relative directory marker");
    }
    if name.len() > MAX_NAME_LEN {
        return Err("name is too long");
    }
    if name.chars().any(|c| INVALID_CHARS.contains(&c) || c.is_control()) {
        return Err("name contains a reserved character");
    }
    if name.ends_with(' ') || name.ends_with('.') {
        return Err("name ends with a space or dot");
    }
    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(stem)) {
        return Err("name is reserved by the platform");
    }
    Ok(())
}

/// Replace characters that cannot appear in a file name with `_`.
pub fn validate_filename(name: &str) -> DomainResult<String> {
    let mut cleaned: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    let trimmed_len = cleaned.trim_end_matches([' ', '.']).len();
    cleaned.truncate(trimmed_len);
    if cleaned.len() > MAX_NAME_LEN {
        let mut cut = MAX_NAME_LEN;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
    }
    let stem = cleaned.split('.').next().unwrap_or_default().to_string();
    if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(&stem)) {
        cleaned.insert(0, '_');
    }
    check_filename(&cleaned).map_err(|reason| DomainError::InvalidFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    })?;
    Ok(cleaned)
}

/// File name a save target must carry: non-empty, not `.` or `..`, and containing an extension separator.
pub fn require_save_file_name(raw: &str) -> DomainResult<&str> {
    let name = clean_file_name(raw);
    if name.is_empty() || name == "." || name == ".." || !has_extension_separator(name) {
        return Err(DomainError::InvalidFileName {
            name: raw.to_string(),
            reason: "missing file name with extension".to_string(),
        });
    }
    Ok(name)
}

/// A replacement name for rename operations: one component, no separators.
pub fn require_plain_name(name: &str) -> DomainResult<&str> {
    check_filename(name).map_err(|reason| DomainError::InvalidFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    })?;
    Ok(name)
}
