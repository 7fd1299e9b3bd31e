//! # Domain
//!
//! Pure rules with no I/O: path resolution against a project root, file
//! name validation, the CSV table and INI document models, and the library
//! configuration value.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod csv;
pub mod ini;
pub mod naming;
pub mod resolver;

pub use config::{FileKitConfig, LineTerminator};
pub use csv::CsvTable;
pub use ini::{ConfigValue, IniDocument, Scalar, ScalarType, ValueType};
pub use naming::PathParts;
pub use resolver::{PathBase, PathResolver, PathSpec, ResolvedPath};
