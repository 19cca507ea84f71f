// src/error.rs
//
// Failure taxonomy for fetch/extract/reshape and session construction.
// Unparseable numbers are not errors; they surface as `None` fields.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure reported by the fetch collaborator.
    #[error("fetch failed for {source_id}: {message}")]
    Fetch { source_id: String, message: String },

    /// Table index past the number of matching tables on the page.
    #[error("table {index} not found ({available} matching tables)")]
    NotFound { index: usize, available: usize },

    /// Header row missing or a data row with the wrong cell count.
    #[error("{}", structural_message(.row, .detail))]
    Structural { row: Option<usize>, detail: String },

    #[error("invalid table selector `{0}`")]
    Selector(String),

    #[error("no sources given")]
    NoSources,

    #[error("{seasons} seasons given for {sources} sources")]
    SeasonCount { sources: usize, seasons: usize },

    #[error("entity schema: {0}")]
    Schema(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn structural_message(row: &Option<usize>, detail: &str) -> String {
    match row {
        Some(r) => format!("parsing issue at row {r}: {detail}"),
        None => format!("malformed table: {detail}"),
    }
}

impl Error {
    pub fn fetch(source_id: &str, message: impl ToString) -> Self {
        Error::Fetch { source_id: s!(source_id), message: message.to_string() }
    }

    pub fn structural(row: Option<usize>, detail: impl Into<String>) -> Self {
        Error::Structural { row, detail: detail.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_message_names_row() {
        let e = Error::structural(Some(3), "2 cells, expected 4");
        assert_eq!(e.to_string(), "parsing issue at row 3: 2 cells, expected 4");

        let e = Error::structural(None, "header row absent");
        assert_eq!(e.to_string(), "malformed table: header row absent");
    }

    #[test]
    fn not_found_message() {
        let e = Error::NotFound { index: 5, available: 2 };
        assert_eq!(e.to_string(), "table 5 not found (2 matching tables)");
    }
}
