//! # Infrastructure
//!
//! `std::fs` backed adapters for the ports plus the file level services the
//! façade composes: file store, directory walker, chunk splitter, base64
//! codec, MD5 hasher, INI persistence and settings loading.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod chunking;
pub mod codec;
pub mod file_store;
pub mod filesystem;
pub mod hashing;
pub mod ini_store;
pub mod persistence;
pub mod settings;
pub mod walker;

pub use chunking::ChunkSplitter;
pub use codec::Base64Codec;
pub use file_store::FileStore;
pub use filesystem::LocalFileSystem;
pub use hashing::Md5Hasher;
pub use ini_store::IniStore;
pub use settings::load_settings;
pub use walker::{DirectoryWalker, ListOptions};
