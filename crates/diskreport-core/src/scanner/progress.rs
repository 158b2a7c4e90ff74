/// Scan progress reporting: lightweight events handed to an optional
/// callback while the walk runs.
///
/// Progress is cosmetic: nothing in the scan result depends on whether
/// or how these events are consumed.
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        current_path: PathBuf,
    },
    /// The walk finished; the result is about to be returned.
    Complete {
        duration: Duration,
        /// Files skipped because they vanished mid-walk.
        skipped: u64,
    },
}
