/// Report assembly: filesystem usage plus scan results, ready to render.
///
/// A [`Report`] is built completely in memory before anything is written,
/// so an interrupted run never leaves a partial report behind.
mod export;
mod text;

use crate::error::ScanError;
use crate::model::ScanResult;
use crate::platform::{filesystem_usage, FilesystemUsage};
use crate::scanner::progress::ScanProgress;
use crate::scanner::Scanner;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Path the report was requested for.
    pub target: PathBuf,
    /// `None` where the platform cannot report usage.
    pub usage: Option<FilesystemUsage>,
    pub scan: ScanResult,
}

impl Report {
    pub fn new(target: PathBuf, usage: Option<FilesystemUsage>, scan: ScanResult) -> Self {
        Self {
            target,
            usage,
            scan,
        }
    }

    /// Scan `target`, then query usage for the filesystem holding it.
    pub fn generate(scanner: &Scanner, target: impl AsRef<Path>) -> Result<Self, ScanError> {
        Self::generate_with_progress(scanner, target, |_| {})
    }

    /// Like [`Report::generate`], forwarding scan progress to `progress`.
    ///
    /// The root is validated by the scanner before usage is queried, so a
    /// missing target is always reported as [`ScanError::Path`].
    pub fn generate_with_progress<F>(
        scanner: &Scanner,
        target: impl AsRef<Path>,
        progress: F,
    ) -> Result<Self, ScanError>
    where
        F: FnMut(&ScanProgress),
    {
        let target = target.as_ref();
        let scan = scanner.scan_with_progress(target, progress)?;
        let usage = match filesystem_usage(target) {
            Ok(usage) => Some(usage),
            Err(ScanError::Unsupported(what)) => {
                warn!("Skipping {what}: not supported on this platform");
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Self::new(target.to_path_buf(), usage, scan))
    }
}
