//! CSV export of a graded batch.
//!
//! The file is rewritten in full on every export, never appended to.

use std::fs::File;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::models::{ExportRow, GradeReport};

pub const DEFAULT_OUTPUT: &str = "grades_output.csv";

pub const HEADER: [&str; 3] = ["Student", "Score", "Grade"];

/// Overwrites `path` with the header, one row per student and the average row.
pub fn write_report(path: &Path, report: &GradeReport) -> Result<usize, ExportError> {
    let rows = report.export_rows();
    debug!(path = %path.display(), rows = rows.len(), "Writing grade export");

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let csv_error = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    for row in rows.iter() {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = rows.len(), "Grade export written");
    Ok(rows.len())
}

pub fn read_report(path: &Path) -> Result<Vec<ExportRow>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize::<ExportRow>() {
        rows.push(result?);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::build_report;
    use crate::models::Letter;
    use std::fs;

    #[test]
    fn writes_header_students_and_average() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.csv");
        let report = build_report(&[90, 80, 70]).unwrap();

        let written = write_report(&path, &report).unwrap();
        assert_eq!(written, 4);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Student,Score,Grade\r\n\
             Student 1,90,A\r\n\
             Student 2,80,A\r\n\
             Student 3,70,B\r\n\
             Average,80.00,A\r\n"
        );
    }

    #[test]
    fn export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.csv");

        write_report(&path, &build_report(&[10, 20, 30, 40]).unwrap()).unwrap();
        write_report(&path, &build_report(&[100]).unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert_eq!(content.matches("Student,Score,Grade").count(), 1);
    }

    #[test]
    fn read_back_matches_export_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.csv");
        let report = build_report(&[100, 65]).unwrap();

        write_report(&path, &report).unwrap();
        let rows = read_report(&path).unwrap();

        assert_eq!(rows, report.export_rows());
        assert_eq!(rows[1].grade, Letter::D);
        assert_eq!(rows[2].label, "Average");
        assert_eq!(rows[2].score, "82.50");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_flush_is_reported_as_write_error() {
        let path = Path::new("/dev/full");
        let report = build_report(&[50, 60]).unwrap();

        let err = write_report(path, &report).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().starts_with("failed to write /dev/full"));
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("grades.csv");
        let report = build_report(&[50]).unwrap();

        let err = write_report(&path, &report).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!path.exists());
    }
}
