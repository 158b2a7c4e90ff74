/// diskreport core: scanning, top-K tracking and report assembly.
///
/// This crate contains all business logic with zero terminal dependencies.
/// The `diskreport` binary is a thin CLI over it.
///
/// # Modules
///
/// - [`config`]: Scan parameters (K, D, root denylist).
/// - [`model`]: File records, per-directory totals and size formatting.
/// - [`analysis`]: Bounded top-K file tracker and directory ranking.
/// - [`scanner`]: Single-pass walk that stays on one filesystem.
/// - [`platform`]: Filesystem space and inode usage.
/// - [`report`]: Text, JSON and CSV rendering of a finished scan.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{ExportError, FormatError, ScanError};
pub use report::Report;
pub use scanner::Scanner;
