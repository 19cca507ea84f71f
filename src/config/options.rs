// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    /// `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: None,
        }
    }
}

/// What to do with a data row whose cell count differs from the header count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Fail the whole extraction at the first mismatched row.
    #[default]
    Strict,
    /// Drop mismatched rows and keep going.
    Permissive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// CSS selector picking candidate tables; `table_index` counts these.
    pub table_selector: String,
    pub row_policy: RowPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            table_selector: s!(DEFAULT_TABLE_SELECTOR),
            row_policy: RowPolicy::Strict,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension wins; otherwise the format picks one.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let name = match &self.out_path.ext {
            Some(ext) => join!(&*stem, ".", &ext.to_string_lossy()),
            None => join!(&*stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert!(export.out_path().ends_with("accepted.csv"));

        export.format = ExportFormat::Json;
        assert!(export.out_path().ends_with("accepted.json"));
    }

    #[test]
    fn typed_extension_is_kept() {
        let mut export = ExportOptions::default();
        export.set_path("some/dir/picked.txt");
        export.format = ExportFormat::Tsv;

        let p = export.out_path();
        assert_eq!(p, PathBuf::from("some/dir/picked.txt"));
    }

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::parse(" TSV "), Some(ExportFormat::Tsv));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::Json.delimiter(), None);
    }
}
