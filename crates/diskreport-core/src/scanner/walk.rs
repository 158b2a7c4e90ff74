/// Serial single-pass directory walk using `jwalk`.
///
/// Traversal is depth-first with siblings sorted by file name, so two walks
/// over an unchanged tree visit entries in the same order. Exclusion
/// (mount points, root denylist) happens in `process_read_dir`, i.e. before
/// the walker reads the excluded directory, and each excluded directory is
/// flagged through its `DirEntryState` so the consuming loop can record it
/// without any shared state.
use crate::analysis::{top_directories, TopFiles};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::{DirectoryAggregates, FileRecord, ScanResult};
use crate::scanner::mount::MountProbe;
use crate::scanner::progress::ScanProgress;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// `jwalk` client state: nothing per read_dir, an "excluded" flag per entry.
type ExclusionState = ((), bool);
type Walker = jwalk::WalkDirGeneric<ExclusionState>;
type Entry = jwalk::DirEntry<ExclusionState>;

/// Walk `root` and build the scan result.
///
/// `root` must already have been checked to be a listable directory.
pub(crate) fn walk<F>(
    root: &Path,
    config: &ScanConfig,
    probe: Arc<dyn MountProbe>,
    apply_denylist: bool,
    mut progress: F,
) -> Result<ScanResult, ScanError>
where
    F: FnMut(&ScanProgress),
{
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let denylist = if apply_denylist {
        config.root_denylist.clone()
    } else {
        Vec::new()
    };

    let walker = Walker::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |depth, parent, _state, children| {
            // `depth` is `None` only for the call that yields the root entry.
            if depth.is_none() {
                return;
            }
            for entry in children.iter_mut().flatten() {
                if !entry.file_type().is_dir() {
                    continue;
                }
                let denied = entry.depth == 1
                    && denylist
                        .iter()
                        .any(|name| entry.file_name().to_str() == Some(name.as_str()));
                if denied || probe.is_mount_point(parent, &entry.path()) {
                    entry.client_state = true;
                    entry.read_children_path = None;
                }
            }
        });

    let mut top = TopFiles::new(config.top_files);
    let mut aggregates = DirectoryAggregates::new();
    let mut excluded: Vec<PathBuf> = Vec::new();
    let mut files_found: u64 = 0;
    let mut dirs_found: u64 = 0;
    let mut total_bytes: u64 = 0;
    let mut skipped: u64 = 0;

    for entry_result in walker {
        let mut entry = entry_result.map_err(|err| walk_error(root, err))?;
        let path = entry.path();

        if entry.client_state {
            debug!("Excluding {} from scan", path.display());
            excluded.push(path);
            continue;
        }

        if entry.file_type().is_dir() {
            // jwalk attaches listing failures to the directory's own entry.
            if let Some(err) = entry.read_children_error.take() {
                return Err(ScanError::DirectoryAccess {
                    path,
                    source: into_io_error(err),
                });
            }
            aggregates.visit(&path);
            dirs_found += 1;
            continue;
        }

        let Some(record) = stat_file(&entry, path, &mut skipped)? else {
            continue;
        };

        aggregates.add(entry.parent_path(), record.size);
        files_found += 1;
        total_bytes += record.size;

        if config.progress_interval > 0 && files_found.is_multiple_of(config.progress_interval) {
            progress(&ScanProgress::Update {
                files_found,
                dirs_found,
                current_path: record.path.clone(),
            });
        }

        top.offer(record);
    }

    let duration = start.elapsed();
    info!(
        "Scan complete: {} files, {} dirs, {} skipped in {:?}",
        files_found, dirs_found, skipped, duration
    );
    progress(&ScanProgress::Complete { duration, skipped });

    Ok(ScanResult {
        root: root.to_path_buf(),
        top_files: top.into_sorted_vec(),
        top_directories: top_directories(&aggregates, config.top_directories),
        total_file_count: files_found,
        total_directory_count: dirs_found,
        total_bytes,
        skipped_files: skipped,
        excluded_directories: excluded,
    })
}

/// Stat a non-directory entry, following symlinks.
///
/// Returns `Ok(None)` for anything that is not counted: files that vanished
/// since the listing (including broken symlinks), symlinks to directories,
/// and special files. Any other failure aborts the scan.
fn stat_file(
    entry: &Entry,
    path: PathBuf,
    skipped: &mut u64,
) -> Result<Option<FileRecord>, ScanError> {
    let meta = match std::fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            trace!("Skipping vanished file {}", path.display());
            *skipped += 1;
            return Ok(None);
        }
        Err(source) => return Err(ScanError::FileAccess { path, source }),
    };

    if !meta.is_file() {
        if entry.file_type().is_symlink() && meta.is_dir() {
            trace!("Not following directory symlink {}", path.display());
        }
        return Ok(None);
    }

    Ok(Some(FileRecord::from_metadata(path, &meta)))
}

/// Any error the walker yields in place of an entry is a directory-level
/// failure.
fn walk_error(root: &Path, err: jwalk::Error) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    ScanError::DirectoryAccess {
        path,
        source: into_io_error(err),
    }
}

fn into_io_error(err: jwalk::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
