//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: whole-file access used by the load/save use cases
//! - [`hashing`]: content digests
//! - [`codec`]: text encodings of binary data
//! - [`root`]: the project root collaborator behind project-relative paths
//!
//! Use cases depend on these traits only; `filekit_infra` supplies the
//! implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod filesystem;
pub mod hashing;
pub mod root;

pub use codec::BinaryCodec;
pub use filesystem::FileSystem;
pub use hashing::{ContentHasher, HashValue};
pub use root::RootProvider;
