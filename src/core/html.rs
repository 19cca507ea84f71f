// src/core/html.rs
//
// Table extraction over a parsed document. Pure: document in, headers + rows out.

use scraper::{ElementRef, Html, Node, Selector};

use crate::config::options::{ExtractOptions, RowPolicy};
use crate::core::sanitize::{normalize_lines, replace_na};
use crate::data::RawTable;
use crate::error::{Error, Result};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Number of tables in `document` matching `css`.
pub fn count_tables(document: &Html, css: &str) -> Result<usize> {
    let sel = selector(css)?;
    Ok(document.select(&sel).count())
}

/// Headers + data rows of the `table_index`-th matching table.
pub fn extract_table(document: &Html, table_index: usize, opts: &ExtractOptions) -> Result<RawTable> {
    let table_sel = selector(&opts.table_selector)?;
    let tables: Vec<ElementRef> = document.select(&table_sel).collect();
    let table = *tables.get(table_index).ok_or(Error::NotFound {
        index: table_index,
        available: tables.len(),
    })?;

    let tr_sel = selector("tr")?;
    let mut rows = table.select(&tr_sel);

    let header_row = rows
        .next()
        .ok_or_else(|| Error::structural(None, "table has no rows"))?;
    let headers: Vec<String> = child_cells(header_row)
        .filter(|c| c.value().name() == "th")
        .map(cell_text)
        .collect();
    if headers.is_empty() {
        return Err(Error::structural(None, "header row absent"));
    }

    let mut out = Vec::new();
    for (i, tr) in rows.enumerate() {
        let row_no = i + 1;
        let cells: Vec<String> = child_cells(tr).map(cell_text).collect();

        if cells.len() != headers.len() {
            match opts.row_policy {
                RowPolicy::Strict => {
                    return Err(Error::structural(
                        Some(row_no),
                        format!("{} cells, expected {}: {:?}", cells.len(), headers.len(), cells),
                    ));
                }
                RowPolicy::Permissive => {
                    logd!("Extract: dropping row {row_no} ({} cells, expected {})", cells.len(), headers.len());
                    continue;
                }
            }
        }
        out.push(cells);
    }

    Ok(RawTable { headers, rows: out })
}

/// Direct `td`/`th` children of a row, in order.
fn child_cells<'a>(tr: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
}

/// Visible cell text. Only `<br>` splits lines; source line wraps count as
/// spaces. Whitespace runs collapse, blank lines drop, an exact `N/A` becomes `0`.
fn cell_text(cell: ElementRef) -> String {
    let mut raw = s!();
    for node in cell.descendants() {
        match node.value() {
            Node::Text(t) => raw.extend(t.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c })),
            Node::Element(e) if e.name() == "br" => raw.push('\n'),
            _ => {}
        }
    }
    replace_na(normalize_lines(&raw))
}
