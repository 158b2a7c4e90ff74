/// Mount-point detection used to keep the walk on one filesystem.
///
/// The walker asks the probe about every subdirectory *before* descending
/// into it; a `true` answer removes that subtree from the scan entirely.
use std::fmt::Debug;
use std::path::Path;

/// Decides whether `child` is a mount point relative to its `parent`.
///
/// Implementations must be cheap and must not fail: anything that cannot
/// be determined is reported as "not a mount point".
pub trait MountProbe: Send + Sync + Debug {
    fn is_mount_point(&self, parent: &Path, child: &Path) -> bool;
}

/// Default probe: a directory is a mount point when it lives on a different
/// device than its parent, or shares the parent's inode.
///
/// Symlinks are never mount points. On non-unix targets this probe never
/// reports a boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceBoundary;

#[cfg(unix)]
impl MountProbe for DeviceBoundary {
    fn is_mount_point(&self, parent: &Path, child: &Path) -> bool {
        use std::os::unix::fs::MetadataExt;

        let (Ok(parent_meta), Ok(child_meta)) =
            (std::fs::symlink_metadata(parent), std::fs::symlink_metadata(child))
        else {
            return false;
        };
        if child_meta.file_type().is_symlink() {
            return false;
        }
        child_meta.dev() != parent_meta.dev() || child_meta.ino() == parent_meta.ino()
    }
}

#[cfg(not(unix))]
impl MountProbe for DeviceBoundary {
    fn is_mount_point(&self, _parent: &Path, _child: &Path) -> bool {
        false
    }
}

/// Probe that never reports a mount point. Useful when the caller wants
/// to cross filesystem boundaries deliberately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBoundary;

impl MountProbe for NoBoundary {
    fn is_mount_point(&self, _parent: &Path, _child: &Path) -> bool {
        false
    }
}
