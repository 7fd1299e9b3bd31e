//! # Shared kernel
//!
//! Types every filekit layer agrees on: the error taxonomy with its stable
//! codes, the `Outcome`/`OperationResult` reporting shape and the value
//! objects produced by file operations.

#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, ErrorKind, FileKitError, InfraResult, InfrastructureError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{
    ChunkDescriptor, FileStat, HashValue, Listing, MIN_TIMESTAMP, OperationResult, Outcome, Timestamp, TreeFailure,
    TreeReport,
};
