use filekit_domain::{PathResolver, PathSpec, naming::clean_file_name};
use filekit_ports::FileSystem;
use filekit_shared_kernel::{DomainError, InfrastructureError, Result};

/// Bytes of a loaded file and the base name of the path it was requested under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct LoadFile<'a> {
    fs: &'a dyn FileSystem,
    resolver: &'a PathResolver,
}

impl<'a> LoadFile<'a> {
    pub fn new(fs: &'a dyn FileSystem, resolver: &'a PathResolver) -> Self {
        Self { fs, resolver }
    }

    /// Fails with invalid argument on an empty path, not found when the
    /// file is absent and I/O when the read itself fails.
    pub fn run(&self, spec: &PathSpec) -> Result<LoadedFile> {
        if spec.is_empty() {
            return Err(DomainError::invalid_argument("file path not set").into());
        }
        let target = self.resolver.resolve(spec);
        if !self.fs.file_exists(&target) {
            return Err(InfrastructureError::NotFound { what: "File", path: target.into_path_buf() }.into());
        }
        let bytes = self.fs.read(&target)?;
        log::debug!("loaded {} bytes from {}", bytes.len(), target);
        Ok(LoadedFile { file_name: clean_file_name(&spec.raw).to_string(), bytes })
    }
}
