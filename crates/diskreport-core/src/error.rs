/// Error types for scanning and size formatting.
///
/// Transient races (a file vanishing between the directory listing and the
/// `stat`) are not errors: the scanner counts and skips them.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures. A scan that returns one of these produces no result.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root is missing or unreadable.
    #[error("cannot scan {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot scan {}: not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// A directory below the root could not be listed.
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be stat'ed for a reason other than having vanished.
    #[error("cannot read file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported on this platform: {0}")]
    Unsupported(&'static str),
}

/// Errors from parsing or rendering human-readable sizes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid size value: {0:?}")]
    InvalidNumber(String),

    #[error("size must not be negative: {0:?}")]
    NegativeSize(String),

    #[error("missing unit in size: {0:?}")]
    MissingUnit(String),

    #[error("size does not fit in 64 bits: {0:?}")]
    Overflow(String),

    #[error("unknown size unit: {0:?}")]
    UnknownUnit(String),

    #[error("unsupported numeration {0:?}, use binary or decimal")]
    UnsupportedNumeration(String),
}

/// Failures while exporting a finished report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialisation failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
