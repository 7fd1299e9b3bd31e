//! Synchronous file-system helpers behind a single [`FileHelper`] façade.
//!
//! ```no_run
//! use filekit::{FileHelper, FileKitConfig, PathSpec};
//!
//! let helper = FileHelper::new(FileKitConfig::with_project_root("/srv/project"));
//! let saved = helper.save_file(&PathSpec::project("Saved/notes.txt"), true, false, b"hello");
//! assert!(saved.is_success());
//! ```

pub use filekit_core::*;
