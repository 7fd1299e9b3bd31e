pub mod chunk;
pub mod file_stat;
pub mod hash;
pub mod listing;
pub mod operation;

pub use chunk::ChunkDescriptor;
pub use file_stat::{FileStat, MIN_TIMESTAMP, Timestamp};
pub use hash::HashValue;
pub use listing::{Listing, TreeFailure, TreeReport};
pub use operation::{OperationResult, Outcome};
