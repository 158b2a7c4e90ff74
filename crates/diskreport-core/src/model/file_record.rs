/// A single regular file observed during a scan.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::PathBuf;

/// Path, logical size and last-modified time of one regular file.
///
/// Created once per file visited and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Logical file size in bytes.
    pub size: u64,
    /// Last-modified timestamp, if the platform reports one.
    pub modified: Option<DateTime<Local>>,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64, modified: Option<DateTime<Local>>) -> Self {
        Self {
            path,
            size,
            modified,
        }
    }

    /// Build a record from `stat` output.
    pub fn from_metadata(path: PathBuf, meta: &Metadata) -> Self {
        let modified = meta.modified().ok().map(DateTime::<Local>::from);
        Self::new(path, meta.len(), modified)
    }
}
