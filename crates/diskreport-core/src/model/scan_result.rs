/// Per-directory size totals and the frozen output of a scan.
use super::file_record::FileRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Running totals keyed by directory path.
///
/// Each entry is the sum of the sizes of the regular files *directly*
/// inside that directory; nested subdirectories are not rolled up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryAggregates {
    totals: HashMap<PathBuf, u64>,
}

impl DirectoryAggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory that was walked, with a zero total if it has
    /// not been seen yet.
    pub fn visit(&mut self, dir: &Path) {
        if !self.totals.contains_key(dir) {
            self.totals.insert(dir.to_path_buf(), 0);
        }
    }

    /// Add a file's size to its parent directory.
    pub fn add(&mut self, dir: &Path, size: u64) {
        match self.totals.get_mut(dir) {
            Some(total) => *total += size,
            None => {
                self.totals.insert(dir.to_path_buf(), size);
            }
        }
    }

    pub fn get(&self, dir: &Path) -> Option<u64> {
        self.totals.get(dir).copied()
    }

    /// Number of distinct directories recorded.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, u64)> {
        self.totals.iter().map(|(p, &s)| (p.as_path(), s))
    }
}

/// One row of the "largest directories" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryTotal {
    pub path: PathBuf,
    /// Bytes held by files directly inside `path`.
    pub size: u64,
}

/// Everything a single scan produces. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The directory the scan started from.
    pub root: PathBuf,
    /// The K largest files, largest first.
    pub top_files: Vec<FileRecord>,
    /// The D largest directories by direct file bytes, largest first.
    pub top_directories: Vec<DirectoryTotal>,
    pub total_file_count: u64,
    /// Distinct directories walked, including the root.
    pub total_directory_count: u64,
    /// Sum of all counted file sizes.
    pub total_bytes: u64,
    /// Files that vanished between listing and `stat` (or broken symlinks).
    pub skipped_files: u64,
    /// Directories left out because they are mount points or denylisted.
    pub excluded_directories: Vec<PathBuf>,
}
