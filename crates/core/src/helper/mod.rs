//! The [`FileHelper`] façade.
//!
//! Every operation resolves its `PathSpec` inputs first, delegates to an
//! infrastructure service or use case, and reports through [`Outcome`].
//! Nothing past this layer returns `Err` or panics.

mod chunks;
mod config_files;
mod directories;
mod files;
mod names;
mod tables;
mod transforms;

use std::path::Path;

use filekit_domain::{FileKitConfig, PathBase, PathResolver, PathSpec, ResolvedPath};
use filekit_infra::{
    Base64Codec, ChunkSplitter, DirectoryWalker, FileStore, IniStore, LocalFileSystem, Md5Hasher, load_settings,
};
use filekit_ports::RootProvider;
use filekit_shared_kernel::{DomainError, Outcome, Result};

pub use files::EncodedFile;

/// Stateless between calls apart from its configuration.
#[derive(Debug, Clone)]
pub struct FileHelper {
    config: FileKitConfig,
    resolver: PathResolver,
    fs: LocalFileSystem,
    store: FileStore,
    walker: DirectoryWalker,
    splitter: ChunkSplitter,
    codec: Base64Codec,
    hasher: Md5Hasher,
    ini: IniStore,
}

impl Default for FileHelper {
    fn default() -> Self {
        Self::new(FileKitConfig::default())
    }
}

impl FileHelper {
    pub fn new(config: FileKitConfig) -> Self {
        let resolver = config.resolver();
        Self::with_resolver(config, resolver)
    }

    /// Anchors project-relative paths at `provider` instead of `config.project_root`.
    pub fn with_root_provider(config: FileKitConfig, provider: &dyn RootProvider) -> Self {
        Self::with_resolver(config, provider.resolver())
    }

    /// Loads a JSON or YAML settings file and validates it.
    pub fn from_settings_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_settings(path.as_ref())?))
    }

    fn with_resolver(config: FileKitConfig, resolver: PathResolver) -> Self {
        Self {
            store: FileStore::from_config(&config),
            splitter: ChunkSplitter::new(config.copy_buffer_size),
            hasher: Md5Hasher::new(config.copy_buffer_size),
            ini: IniStore::new(config.line_terminator),
            fs: LocalFileSystem::new(),
            walker: DirectoryWalker::new(),
            codec: Base64Codec::new(),
            resolver,
            config,
        }
    }

    pub fn config(&self) -> &FileKitConfig {
        &self.config
    }

    /// Resolution never fails; empty input resolves to the working directory or project root.
    pub fn resolve(&self, spec: &PathSpec) -> ResolvedPath {
        self.resolver.resolve(spec)
    }

    /// Resolves a path an operation will act on. Empty input is rejected.
    fn target(&self, spec: &PathSpec) -> Result<ResolvedPath> {
        if spec.is_empty() {
            return Err(DomainError::invalid_argument("path is empty").into());
        }
        Ok(self.resolver.resolve(spec))
    }

    /// Like [`Self::target`], but an empty project-relative path names the project root.
    fn directory(&self, spec: &PathSpec) -> Result<ResolvedPath> {
        if spec.is_empty() && spec.base == PathBase::Absolute {
            return Err(DomainError::invalid_argument("directory path is empty").into());
        }
        Ok(self.resolver.resolve(spec))
    }
}

/// Converts an internal result, logging failures.
fn report<T>(operation: &str, result: Result<T>, fallback: impl FnOnce() -> T) -> Outcome<T> {
    if let Err(err) = &result {
        log::warn!("{operation} failed: {err}");
    }
    Outcome::from_result_or(result, fallback)
}

fn report_default<T: Default>(operation: &str, result: Result<T>) -> Outcome<T> {
    report(operation, result, T::default)
}
