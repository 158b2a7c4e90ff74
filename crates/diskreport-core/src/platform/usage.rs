/// Space and inode usage of the filesystem holding a path.
///
/// Uses `statvfs(3)` on unix. Other platforms report
/// [`ScanError::Unsupported`].
use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filesystem capacity figures, all in bytes except the inode counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemUsage {
    pub total: u64,
    pub used: u64,
    /// Space available to unprivileged users.
    pub free: u64,
    pub inodes_total: u64,
    pub inodes_used: u64,
    pub inodes_free: u64,
}

impl FilesystemUsage {
    /// Percentage of space in use, rounded to two decimals.
    pub fn used_percent(&self) -> f64 {
        percent(self.used, self.total)
    }

    /// Percentage of inodes in use, rounded to two decimals.
    pub fn inodes_used_percent(&self) -> f64 {
        percent(self.inodes_used, self.inodes_total)
    }
}

/// `part / whole * 100` rounded to two decimals; 0.0 when `whole` is 0.
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}

/// Query usage for the filesystem that contains `path`.
#[cfg(unix)]
pub fn filesystem_usage(path: &Path) -> Result<FilesystemUsage, ScanError> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|e| ScanError::Path {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
    })?;

    // SAFETY: `c_path` is a valid NUL-terminated string and `stat` is a
    // properly sized, writable out-parameter.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(ScanError::Path {
            path: path.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }

    #[allow(clippy::unnecessary_cast)]
    let (blocks, bfree, bavail, frsize, files, favail) = (
        stat.f_blocks as u64,
        stat.f_bfree as u64,
        stat.f_bavail as u64,
        stat.f_frsize as u64,
        stat.f_files as u64,
        stat.f_favail as u64,
    );

    Ok(FilesystemUsage {
        total: blocks * frsize,
        used: blocks.saturating_sub(bfree) * frsize,
        free: bavail * frsize,
        inodes_total: files,
        inodes_used: files.saturating_sub(favail),
        inodes_free: favail,
    })
}

#[cfg(not(unix))]
pub fn filesystem_usage(_path: &Path) -> Result<FilesystemUsage, ScanError> {
    Err(ScanError::Unsupported("filesystem usage query"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages() {
        let usage = FilesystemUsage {
            total: 1_000,
            used: 250,
            free: 700,
            inodes_total: 3,
            inodes_used: 1,
            inodes_free: 2,
        };
        assert_eq!(usage.used_percent(), 25.0);
        assert_eq!(usage.inodes_used_percent(), 33.33);
    }

    #[test]
    fn test_zero_totals() {
        let usage = FilesystemUsage {
            total: 0,
            used: 0,
            free: 0,
            inodes_total: 0,
            inodes_used: 0,
            inodes_free: 0,
        };
        assert_eq!(usage.used_percent(), 0.0);
        assert_eq!(usage.inodes_used_percent(), 0.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_usage_of_temp_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let usage = filesystem_usage(tmp.path()).unwrap();
        assert!(usage.total > 0);
        assert!(usage.used <= usage.total);
    }

    #[cfg(unix)]
    #[test]
    fn test_usage_of_missing_path() {
        let err = filesystem_usage(Path::new("/nonexistent_diskreport_12345")).unwrap_err();
        assert!(matches!(err, ScanError::Path { .. }));
    }
}
