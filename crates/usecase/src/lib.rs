//! # Use Cases
//!
//! Whole-file orchestrations with ordered validation, written against the
//! ports only:
//!
//! - [`load_file`]: read a file and report its base name
//! - [`save_file`]: validated write with optional directory creation
//! - [`base64_file`]: decode base64 text into a file without creating directories
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod base64_file;
pub mod load_file;
pub mod save_file;

#[cfg(test)]
mod test_support;

pub use base64_file::Base64ToFile;
pub use load_file::{LoadFile, LoadedFile};
pub use save_file::{SaveFile, SaveOptions, SavedFile};
