use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileKitError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileKitError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, FileKitError>;

/// Stable failure categories reported to callers.
///
/// The numeric codes are part of the public contract; `0` is reserved for success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Io,
    Decode,
}

impl ErrorKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArgument => 1,
            Self::NotFound => 2,
            Self::AlreadyExists => 3,
            Self::Io => 4,
            Self::Decode => 5,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidArgument),
            2 => Some(Self::NotFound),
            3 => Some(Self::AlreadyExists),
            4 => Some(Self::Io),
            5 => Some(Self::Decode),
            _ => None,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Cannot parse {section}.{key} as {expected}: '{raw}'")]
    ConfigValueMismatch {
        section: String,
        key: String,
        expected: String,
        raw: String,
    },

    #[error("Malformed CSV at line {line}: {details}")]
    MalformedCsv { line: usize, details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("{what} not found: '{path}'")]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Destination already exists: '{path}'")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A step failed without an underlying `io::Error` worth keeping; always an I/O category.
    #[error("{operation} failed for '{path}': {details}")]
    OperationFailed {
        operation: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to decode {format}: {details}")]
    Decode { format: String, details: String },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("{operation} finished with {failed} failed entries under '{path}'")]
    PartialFailure {
        operation: String,
        path: PathBuf,
        failed: usize,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl FileKitError {
    /// Category of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(err) => err.kind(),
            Self::Infrastructure(err) => err.kind(),
        }
    }
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigValueMismatch { .. } | Self::MalformedCsv { .. } => ErrorKind::Decode,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }
}

impl InfrastructureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::Decode { .. } | Self::SerializationError { .. } => ErrorKind::Decode,
            Self::FileRead { source, .. }
            | Self::FileWrite { source, .. }
            | Self::FileSystemOperation { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorKind::NotFound,
                std::io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
                std::io::ErrorKind::InvalidData => ErrorKind::Decode,
                _ => ErrorKind::Io,
            },
            Self::PartialFailure { .. } | Self::OperationFailed { .. } => ErrorKind::Io,
        }
    }

    pub fn failed(operation: impl Into<String>, path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::OperationFailed { operation: operation.into(), path: path.into(), details: details.to_string() }
    }

    pub fn fs(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystemOperation { operation: operation.into(), path: path.into(), source }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystemOperation { operation: "io".to_string(), path: PathBuf::new(), source: err }
    }
}

impl From<std::io::Error> for FileKitError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError { format: "JSON".to_string(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for FileKitError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError { format: "YAML".to_string(), details: err.to_string() }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for FileKitError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileKitError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileKitError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileKitError::Context { context: f(), source: Box::new(e.into()) })
    }
}
