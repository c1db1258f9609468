use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{IssueRecord, CSV_COLUMNS};

/// Replaces path separators and spaces so a project name is safe as a
/// file name.
pub fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ' ' => '_',
            c => c,
        })
        .collect()
}

pub fn project_csv_path(output_dir: &Path, project_name: &str) -> PathBuf {
    output_dir.join(format!("{}.csv", sanitize_project_name(project_name)))
}

/// Writes records to `path` with the canonical column order. The header row
/// is always written, so an empty record set still produces a valid CSV
/// with a stable schema.
pub fn write_records(path: &Path, records: &[IssueRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(&CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
