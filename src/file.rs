// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::data::Record;
use crate::error::{Error, Result};
use crate::session::AcceptedSet;

#[derive(Serialize)]
struct AcceptedPair<'a> {
    source_id: &'a str,
    table_index: usize,
    records: &'a [Record],
}

/// Serialize the accepted set in the configured format.
pub fn render_accepted(export: &ExportOptions, accepted: &AcceptedSet) -> Result<String> {
    match export.format.delimiter() {
        Some(sep) => Ok(to_export_string(accepted, export.include_headers, sep)),
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            let pairs: Vec<AcceptedPair> = accepted
                .iter()
                .map(|(source_id, table_index, records)| AcceptedPair { source_id, table_index, records })
                .collect();
            Ok(serde_json::to_string_pretty(&pairs)?)
        }
    }
}

/// Write the accepted set to `export.out_path()`. Returns the final path.
pub fn export_accepted(export: &ExportOptions, accepted: &AcceptedSet) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render_accepted(export, accepted)?;
    fs::write(&path, contents)?;
    logf!(
        "Export: {} pairs / {} records → {}",
        accepted.len(),
        accepted.record_count(),
        path.display()
    );
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
