use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Timestamp = DateTime<Utc>;

/// Sentinel used for timestamps the platform could not report.
pub const MIN_TIMESTAMP: Timestamp = DateTime::<Utc>::MIN_UTC;

/// Snapshot of a file system node, produced fresh on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub is_directory: bool,
    pub is_read_only: bool,
    pub last_access_time: Timestamp,
    pub creation_time: Timestamp,
    pub modification_time: Timestamp,
    pub size_bytes: i64,
}

impl Default for FileStat {
    fn default() -> Self {
        Self {
            is_directory: false,
            is_read_only: false,
            last_access_time: MIN_TIMESTAMP,
            creation_time: MIN_TIMESTAMP,
            modification_time: MIN_TIMESTAMP,
            size_bytes: 0,
        }
    }
}

impl FileStat {
    /// True when the modification time was actually reported.
    pub fn has_modification_time(&self) -> bool {
        self.modification_time != MIN_TIMESTAMP
    }
}
