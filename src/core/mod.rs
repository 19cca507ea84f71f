// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{count_tables, extract_table};
pub use net::{Fetch, FileFetcher, HttpFetcher, SourceFetcher};
