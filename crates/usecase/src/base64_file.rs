use filekit_domain::{PathResolver, PathSpec, ResolvedPath};
use filekit_ports::{BinaryCodec, FileSystem};
use filekit_shared_kernel::{DomainError, InfrastructureError, Result};

/// Decodes base64 text into a file. Never creates the destination directory.
pub struct Base64ToFile<'a> {
    fs: &'a dyn FileSystem,
    codec: &'a dyn BinaryCodec,
    resolver: &'a PathResolver,
}

impl<'a> Base64ToFile<'a> {
    pub fn new(fs: &'a dyn FileSystem, codec: &'a dyn BinaryCodec, resolver: &'a PathResolver) -> Self {
        Self { fs, codec, resolver }
    }

    pub fn run(&self, spec: &PathSpec, data: &str) -> Result<ResolvedPath> {
        if data.is_empty() {
            return Err(DomainError::invalid_argument("base64 data is empty").into());
        }
        if spec.is_empty() {
            return Err(DomainError::invalid_argument("file path not set").into());
        }
        let target = self.resolver.resolve(spec);
        if let Some(parent) = target.parent() {
            if !self.fs.dir_exists(&parent) {
                return Err(InfrastructureError::NotFound { what: "Directory", path: parent.into_path_buf() }.into());
            }
        }

        let bytes = self.codec.decode(data)?;
        self.fs.write(&target, &bytes, false)?;
        if !self.fs.file_exists(&target) {
            return Err(InfrastructureError::failed("base64 to file", target.as_path(), "file missing after write").into());
        }
        log::debug!("decoded {} bytes into {}", bytes.len(), target);
        Ok(target)
    }
}
