/// Scanner module: single-pass, single-filesystem tree walk.
///
/// A [`Scanner`] is built from a [`ScanConfig`] and an optional
/// [`MountProbe`]. Each call to [`Scanner::scan`] checks the root up front,
/// walks the tree once and returns a frozen [`ScanResult`], or an error
/// and no result at all.
pub mod mount;
pub mod progress;
mod walk;

use crate::config::{DenylistScope, ScanConfig};
use crate::error::ScanError;
use crate::model::ScanResult;
use mount::{DeviceBoundary, MountProbe};
use progress::ScanProgress;

use std::path::Path;
use std::sync::Arc;

/// Walks one directory tree and reports the largest files and directories.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
    probe: Arc<dyn MountProbe>,
}

impl Scanner {
    /// Create a scanner that stops at device boundaries.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            probe: Arc::new(DeviceBoundary),
        }
    }

    /// Replace the mount-point probe.
    pub fn with_mount_probe<P: MountProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Scan `root` without progress reporting.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanResult, ScanError> {
        self.scan_with_progress(root, |_| {})
    }

    /// Scan `root`, handing periodic [`ScanProgress`] events to `progress`.
    ///
    /// Fails with [`ScanError::Path`] or [`ScanError::NotADirectory`] before
    /// any traversal if the root cannot be listed.
    pub fn scan_with_progress<F>(
        &self,
        root: impl AsRef<Path>,
        progress: F,
    ) -> Result<ScanResult, ScanError>
    where
        F: FnMut(&ScanProgress),
    {
        let root = root.as_ref();
        check_root(root)?;
        walk::walk(
            root,
            &self.config,
            self.probe.clone(),
            self.denylist_applies(root),
            progress,
        )
    }

    fn denylist_applies(&self, root: &Path) -> bool {
        match self.config.denylist_scope {
            DenylistScope::ScanRoot => true,
            DenylistScope::FilesystemRoot => is_filesystem_root(root),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Fail fast if the root is missing, not a directory, or unlistable.
fn check_root(root: &Path) -> Result<(), ScanError> {
    let meta = std::fs::metadata(root).map_err(|source| ScanError::Path {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    std::fs::read_dir(root).map_err(|source| ScanError::Path {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn is_filesystem_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}
