//! # filekit core
//!
//! [`FileHelper`] is the public entry point: one method per operation,
//! each returning an [`Outcome`] whose `result` carries a stable error code.
//! The supporting types are re-exported so callers need only this crate.

#![allow(clippy::multiple_crate_versions)]

pub mod helper;

pub use filekit_domain::{
    ConfigValue, CsvTable, FileKitConfig, LineTerminator, PathBase, PathParts, PathSpec, ResolvedPath, Scalar,
    ScalarType, ValueType,
};
pub use filekit_infra::ListOptions;
pub use filekit_ports::{HashValue, RootProvider};
pub use filekit_shared_kernel::{
    ChunkDescriptor, ErrorKind, FileStat, Listing, MIN_TIMESTAMP, OperationResult, Outcome, Timestamp, TreeFailure,
    TreeReport,
};
pub use filekit_usecase::{LoadedFile, SavedFile};
pub use helper::{EncodedFile, FileHelper};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
