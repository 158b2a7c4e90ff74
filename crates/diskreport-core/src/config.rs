/// Scan configuration.
///
/// Every tunable the scanner needs is carried here and handed to
/// [`crate::scanner::Scanner::new`]; nothing is read from globals.
use serde::{Deserialize, Serialize};

/// Default number of largest files kept (K).
pub const DEFAULT_TOP_FILES: usize = 20;

/// Default number of largest directories reported (D).
pub const DEFAULT_TOP_DIRECTORIES: usize = 10;

/// Default number of files between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 5_000;

/// Pseudo-filesystem directories skipped at the root by default.
pub const DEFAULT_ROOT_DENYLIST: &[&str] = &["dev", "proc", "selinux", "sys"];

/// Where the root denylist applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenylistScope {
    /// Only when the scan root is the filesystem root (`/`).
    #[default]
    FilesystemRoot,
    /// The immediate children of whatever directory is scanned.
    ScanRoot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of largest files to keep (K).
    pub top_files: usize,
    /// Number of largest directories to report (D).
    pub top_directories: usize,
    /// Directory names excluded from descent at the root level only.
    pub root_denylist: Vec<String>,
    pub denylist_scope: DenylistScope,
    /// Emit a progress update every this many files. `0` disables updates.
    pub progress_interval: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            top_files: DEFAULT_TOP_FILES,
            top_directories: DEFAULT_TOP_DIRECTORIES,
            root_denylist: DEFAULT_ROOT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            denylist_scope: DenylistScope::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ScanConfig {
    pub fn with_top_files(mut self, k: usize) -> Self {
        self.top_files = k;
        self
    }

    pub fn with_top_directories(mut self, d: usize) -> Self {
        self.top_directories = d;
        self
    }

    /// Replace the root denylist.
    pub fn with_root_denylist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_denylist = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_denylist_scope(mut self, scope: DenylistScope) -> Self {
        self.denylist_scope = scope;
        self
    }

    pub fn with_progress_interval(mut self, every: u64) -> Self {
        self.progress_interval = every;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.top_files, 20);
        assert_eq!(cfg.top_directories, 10);
        assert_eq!(cfg.denylist_scope, DenylistScope::FilesystemRoot);
        assert!(cfg.root_denylist.iter().any(|n| n == "proc"));
    }

    #[test]
    fn test_builders() {
        let cfg = ScanConfig::default()
            .with_top_files(3)
            .with_top_directories(2)
            .with_root_denylist(["skip"])
            .with_denylist_scope(DenylistScope::ScanRoot)
            .with_progress_interval(0);
        assert_eq!(cfg.top_files, 3);
        assert_eq!(cfg.top_directories, 2);
        assert_eq!(cfg.root_denylist, vec!["skip".to_string()]);
        assert_eq!(cfg.denylist_scope, DenylistScope::ScanRoot);
        assert_eq!(cfg.progress_interval, 0);
    }
}
