use std::path::PathBuf;

use filekit_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

const MIN_COPY_BUFFER: usize = 4 * 1024;
const DEFAULT_COPY_BUFFER: usize = 64 * 1024;

/// Line terminator written by text and table writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTerminator {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineTerminator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Library wide settings. Every field is optional in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileKitConfig {
    /// Anchor for project-relative paths.
    pub project_root: PathBuf,
    pub line_terminator: LineTerminator,
    /// Buffer size used when streaming file contents (copy, hash, split).
    pub copy_buffer_size: usize,
}

impl Default for FileKitConfig {
    fn default() -> Self {
        Self {
            project_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            line_terminator: LineTerminator::default(),
            copy_buffer_size: DEFAULT_COPY_BUFFER,
        }
    }
}

impl FileKitConfig {
    pub fn with_project_root(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into(), ..Self::default() }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.project_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "project_root must not be empty".into() });
        }
        if self.copy_buffer_size < MIN_COPY_BUFFER {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("copy_buffer_size must be at least {MIN_COPY_BUFFER} bytes"),
            });
        }
        Ok(())
    }
}
