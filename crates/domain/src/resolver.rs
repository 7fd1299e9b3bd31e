//! Path resolution: turns user supplied `(base, raw)` pairs into absolute paths.

use std::{
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use filekit_shared_kernel::path::{logical_absolute, normalize_lexically};
use serde::{Deserialize, Serialize};

/// How a raw path string should be anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathBase {
    /// Taken as given; relative inputs anchor at the working directory.
    #[default]
    Absolute,
    /// Concatenated onto the configured project root.
    ProjectRelative,
}

/// Immutable user input naming a file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSpec {
    pub base: PathBase,
    pub raw: String,
}

impl PathSpec {
    pub fn new(base: PathBase, raw: impl Into<String>) -> Self {
        Self { base, raw: raw.into() }
    }

    pub fn absolute(raw: impl Into<String>) -> Self {
        Self::new(PathBase::Absolute, raw)
    }

    pub fn project(raw: impl Into<String>) -> Self {
        Self::new(PathBase::ProjectRelative, raw)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<&Path> for PathSpec {
    fn from(path: &Path) -> Self {
        Self::absolute(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for PathSpec {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

/// Absolute, lexically normalized path. The only path type the adapters accept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    /// Anchor `path` at the working directory when relative, then normalize.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(normalize_lexically(&logical_absolute(path.as_ref())))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        Self(normalize_lexically(&self.0.join(segment)))
    }

    pub fn parent(&self) -> Option<Self> {
        self.0.parent().map(|p| Self(p.to_path_buf()))
    }

    /// Final component as UTF-8, lossy for non UTF-8 names.
    pub fn file_name(&self) -> Option<String> {
        self.0.file_name().map(|s| s.to_string_lossy().into_owned())
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Deref for ResolvedPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolves [`PathSpec`] values against a fixed project root. Pure and infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    project_root: ResolvedPath,
}

impl PathResolver {
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self { project_root: ResolvedPath::new(project_root) }
    }

    pub fn project_root(&self) -> &ResolvedPath {
        &self.project_root
    }

    pub fn resolve(&self, spec: &PathSpec) -> ResolvedPath {
        self.resolve_raw(spec.base, &spec.raw)
    }

    pub fn resolve_raw(&self, base: PathBase, raw: &str) -> ResolvedPath {
        match base {
            PathBase::Absolute => ResolvedPath::new(raw),
            PathBase::ProjectRelative => {
                // Concatenation semantics: a leading separator must not replace the root.
                let trimmed = raw.trim_start_matches(['/', '\\']);
                self.project_root.join(trimmed)
            }
        }
    }
}
