/// Machine-readable export: pretty JSON of the whole report, or CSV rows
/// for the ranked directories and files.
use super::Report;
use crate::error::ExportError;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CsvRow {
    kind: &'static str,
    size: u64,
    modified: Option<String>,
    path: String,
}

impl Report {
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `kind,size,modified,path` rows: directories first, then files,
    /// each in ranking order. Directory rows leave `modified` empty.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut out = csv::Writer::from_writer(writer);
        for dir in &self.scan.top_directories {
            out.serialize(CsvRow {
                kind: "directory",
                size: dir.size,
                modified: None,
                path: dir.path.to_string_lossy().into_owned(),
            })?;
        }
        for file in &self.scan.top_files {
            out.serialize(CsvRow {
                kind: "file",
                size: file.size,
                modified: file.modified.map(|t| t.to_rfc3339()),
                path: file.path.to_string_lossy().into_owned(),
            })?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{DirectoryTotal, FileRecord, ScanResult};
    use crate::report::Report;
    use std::path::PathBuf;

    fn report() -> Report {
        let scan = ScanResult {
            root: PathBuf::from("/srv"),
            top_files: vec![FileRecord::new(PathBuf::from("/srv/a.bin"), 42, None)],
            top_directories: vec![DirectoryTotal {
                path: PathBuf::from("/srv"),
                size: 42,
            }],
            total_file_count: 1,
            total_directory_count: 1,
            total_bytes: 42,
            skipped_files: 0,
            excluded_directories: vec![PathBuf::from("/srv/mnt")],
        };
        Report::new(PathBuf::from("/srv"), None, scan)
    }

    #[test]
    fn test_json_round_trip() {
        let report = report();
        let json = report.to_json().unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        report().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "kind,size,modified,path",
                "directory,42,,/srv",
                "file,42,,/srv/a.bin",
            ]
        );
    }
}
