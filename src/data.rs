// src/data.rs
//
// Table shapes moving through the pipeline.
//
// - RawTable: header texts + data rows exactly as extracted (strings).
// - Record:   one long-format row, one entity for one episode.
//
// Display and export both go through `Record::HEADERS` / `Record::to_row`
// so the column order stays the same everywhere.

use serde::{Deserialize, Serialize};

/// Extracted table. Every row has `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// True when every row matches the header width.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.headers.len())
    }
}

/// Long-format record: one (row, entity) pair.
/// `spent` / `profit` are `None` when the cell didn't hold a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub season: Option<u32>,
    pub episode: Option<String>,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub entity: String,
    pub spent: Option<f64>,
    pub profit: Option<f64>,
}

impl Record {
    pub const HEADERS: [&'static str; 7] =
        ["Season", "Episode", "Title", "Air Date", "Party", "Spent", "Profit"];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Display/export cells. Absent values are empty strings.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.season.map(|s| s.to_string()).unwrap_or_default(),
            self.episode.clone().unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
            self.air_date.clone().unwrap_or_default(),
            self.entity.clone(),
            fmt_amount(self.spent),
            fmt_amount(self.profit),
        ]
    }
}

pub fn fmt_amount(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Rows for a whole record set.
pub fn to_rows(records: &[Record]) -> Vec<Vec<String>> {
    records.iter().map(Record::to_row).collect()
}
