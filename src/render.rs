// src/render.rs
//
// Text rendering of the current pair for terminal front ends.

use crate::data::{Record, to_rows};
use crate::session::{PairResult, PairView};

pub const NO_DATA: &str = "Failed to parse table or no data available.";

/// `URL / Table Index / Status` block shown above every table.
pub fn metadata(view: &PairView) -> String {
    let tables = match view.table_count {
        Some(n) => format!("{} of {}", view.table_index, n),
        None => format!("{} of ?", view.table_index),
    };
    let season = view.season.map(|s| s.to_string()).unwrap_or_else(|| s!("-"));
    let status = if view.accepted { "Already added" } else { "Not added" };
    format!(
        "URL: {}\nSource: {} of {} (season {})\nTable Index: {}\nStatus: {}",
        view.source_id,
        view.source_index + 1,
        view.source_count,
        season,
        tables,
        status
    )
}

/// Body for the current pair: a table, the stored error, or a placeholder.
pub fn body(result: &PairResult) -> String {
    match result {
        PairResult::Loaded(records) if !records.is_empty() => markdown(records),
        PairResult::Loaded(_) | PairResult::NotLoaded => s!(NO_DATA),
        PairResult::Error(msg) => format!("Error loading table: {msg}"),
    }
}

pub fn screen(view: &PairView) -> String {
    join!(&metadata(view), "\n\n", &body(view.result))
}

/// Pipe table with columns padded to their widest cell.
pub fn markdown(records: &[Record]) -> String {
    let headers = Record::headers();
    let rows = to_rows(records);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(md_cell(cell).chars().count());
        }
    }

    let mut out = s!();
    push_md_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_md_row(&mut out, &rule, &widths);
    for row in &rows {
        push_md_row(&mut out, row, &widths);
    }
    out
}

fn md_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

fn push_md_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, w) in cells.iter().zip(widths) {
        let text = md_cell(cell);
        let pad = w.saturating_sub(text.chars().count());
        out.push(' ');
        out.push_str(&text);
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}
