// src/csv.rs
use std::io::{self, Write};

use crate::data::Record;
use crate::session::AcceptedSet;

/// Leading columns added in front of `Record::HEADERS` on export.
pub const PAIR_HEADERS: [&str; 2] = ["Source", "Table"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn export_headers() -> Vec<String> {
    PAIR_HEADERS
        .iter()
        .chain(Record::HEADERS.iter())
        .map(|h| s!(*h))
        .collect()
}

/// Flatten the accepted set: one row per record, prefixed by source id and table index.
pub fn accepted_rows(accepted: &AcceptedSet) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(accepted.record_count());
    for (source_id, table_index, records) in accepted.iter() {
        for r in records {
            let mut row = Vec::with_capacity(PAIR_HEADERS.len() + Record::HEADERS.len());
            row.push(s!(source_id));
            row.push(table_index.to_string());
            row.extend(r.to_row());
            rows.push(row);
        }
    }
    rows
}

/// Full delimited text for the accepted set.
pub fn to_export_string(accepted: &AcceptedSet, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &export_headers(), sep);
    }
    for row in accepted_rows(accepted) {
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
