/// Plain-text rendering of a [`Report`].
use super::Report;
use crate::model::size::human_readable_size;
use crate::model::FileRecord;

/// Width of the left-aligned size column.
const SIZE_COLUMN: usize = 10;
/// Width of the modification-time column.
const MODIFIED_COLUMN: usize = 20;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Report {
    /// Render the report as lines of text, in display order.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let target = self.target.display();

        match &self.usage {
            Some(usage) => {
                lines.push(format!(
                    "{:.2}% of disk space used on {target}",
                    usage.used_percent()
                ));
                lines.push(format!(
                    "Total: {}\tUsed: {}\tFree: {}",
                    human_readable_size(usage.total),
                    human_readable_size(usage.used),
                    human_readable_size(usage.free)
                ));
                lines.push(String::new());
                lines.push(format!(
                    "{:.2}% of total inodes used",
                    usage.inodes_used_percent()
                ));
                lines.push(format!(
                    "Total Inodes: {}\tUsed: {}\tFree: {}",
                    usage.inodes_total, usage.inodes_used, usage.inodes_free
                ));
                lines.push(String::new());
            }
            None => {
                lines.push(format!("Filesystem usage unavailable for {target}"));
                lines.push(String::new());
            }
        }

        let scan = &self.scan;
        lines.push(format!(
            "Total directory count of {}",
            scan.total_directory_count
        ));
        lines.push(format!(
            "The {} largest directories are:",
            scan.top_directories.len()
        ));
        lines.push(String::new());
        lines.push(format!("{:<SIZE_COLUMN$}Directory", "Size"));
        for dir in &scan.top_directories {
            lines.push(format!(
                "{:<SIZE_COLUMN$}{}",
                human_readable_size(dir.size),
                dir.path.display()
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total file count of {}", scan.total_file_count));
        lines.push(format!(
            "The {} largest files are:",
            scan.top_files.len()
        ));
        lines.push(String::new());
        lines.push(format!(
            "{:<SIZE_COLUMN$}{:<MODIFIED_COLUMN$}File",
            "Size", "Modified"
        ));
        for file in &scan.top_files {
            lines.push(format!(
                "{:<SIZE_COLUMN$}{:<MODIFIED_COLUMN$}{}",
                human_readable_size(file.size),
                modified_label(file),
                file.path.display()
            ));
        }

        lines
    }

    /// Render the full report as a single string.
    pub fn render_text(&self) -> String {
        self.text_lines().join("\n")
    }
}

fn modified_label(file: &FileRecord) -> String {
    file.modified
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use crate::model::{DirectoryTotal, FileRecord, ScanResult};
    use crate::platform::FilesystemUsage;
    use crate::report::Report;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn sample_report(usage: Option<FilesystemUsage>) -> Report {
        let modified = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).single();
        let scan = ScanResult {
            root: PathBuf::from("/data"),
            top_files: vec![
                FileRecord::new(PathBuf::from("/data/big.iso"), 2 * 1024 * 1024, modified),
                FileRecord::new(PathBuf::from("/data/notes.txt"), 1536, None),
            ],
            top_directories: vec![DirectoryTotal {
                path: PathBuf::from("/data"),
                size: 2 * 1024 * 1024 + 1536,
            }],
            total_file_count: 2,
            total_directory_count: 1,
            total_bytes: 2 * 1024 * 1024 + 1536,
            skipped_files: 0,
            excluded_directories: Vec::new(),
        };
        Report::new(PathBuf::from("/data"), usage, scan)
    }

    fn usage() -> FilesystemUsage {
        FilesystemUsage {
            total: 4096,
            used: 1024,
            free: 3072,
            inodes_total: 100,
            inodes_used: 40,
            inodes_free: 60,
        }
    }

    #[test]
    fn test_text_sections_in_order() {
        let lines = sample_report(Some(usage())).text_lines();
        assert_eq!(lines[0], "25.00% of disk space used on /data");
        assert_eq!(lines[1], "Total: 4.0KB\tUsed: 1.0KB\tFree: 3.0KB");
        assert_eq!(lines[3], "40.00% of total inodes used");
        assert_eq!(lines[4], "Total Inodes: 100\tUsed: 40\tFree: 60");
        assert_eq!(lines[6], "Total directory count of 1");
        assert_eq!(lines[7], "The 1 largest directories are:");
        assert_eq!(lines[9], "Size      Directory");
        assert_eq!(lines[10], "2.0MB     /data");
        assert_eq!(lines[12], "Total file count of 2");
        assert_eq!(lines[13], "The 2 largest files are:");
        assert_eq!(lines[15], "Size      Modified            File");
        assert_eq!(lines[16], "2.0MB     2024-03-09 14:05:00 /data/big.iso");
        assert_eq!(lines[17], "1.5KB     -                   /data/notes.txt");
        assert_eq!(lines.len(), 18);
    }

    #[test]
    fn test_text_without_usage() {
        let text = sample_report(None).render_text();
        assert!(text.starts_with("Filesystem usage unavailable for /data\n"));
        assert!(text.contains("Total file count of 2"));
    }
}
