/// Data model for scan output.
///
/// Re-exports the file record, per-directory totals and size formatting.
pub mod file_record;
pub mod scan_result;
pub mod size;

pub use file_record::FileRecord;
pub use scan_result::{DirectoryAggregates, DirectoryTotal, ScanResult};
