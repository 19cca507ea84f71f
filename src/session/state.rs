// src/session/state.rs
use std::collections::HashMap;

use scraper::Html;

use super::accepted::AcceptedSet;
use super::command::{Command, Flow};
use crate::config::options::ExtractOptions;
use crate::config::schema::EntitySchema;
use crate::core::html::{count_tables, extract_table};
use crate::core::net::Fetch;
use crate::core::sanitize::season_from_id;
use crate::data::Record;
use crate::error::{Error, Result};
use crate::reshape::reshape;

/// One page to review and the season its records are tagged with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceEntry {
    pub source_id: String,
    pub season: Option<u32>,
}

impl SourceEntry {
    pub fn new(source_id: impl Into<String>, season: Option<u32>) -> Self {
        Self { source_id: source_id.into(), season }
    }

    /// Season taken from the trailing digits of the id, if any.
    pub fn inferred(source_id: impl Into<String>) -> Self {
        let source_id = source_id.into();
        let season = season_from_id(&source_id);
        Self { source_id, season }
    }

    /// Pair ids with explicit seasons, or infer each one when `seasons` is `None`.
    pub fn from_ids<S: AsRef<str>>(ids: &[S], seasons: Option<&[Option<u32>]>) -> Result<Vec<Self>> {
        match seasons {
            None => Ok(ids.iter().map(|id| Self::inferred(id.as_ref())).collect()),
            Some(seasons) if seasons.len() == ids.len() => Ok(ids
                .iter()
                .zip(seasons)
                .map(|(id, season)| Self::new(id.as_ref(), *season))
                .collect()),
            Some(seasons) => Err(Error::SeasonCount { sources: ids.len(), seasons: seasons.len() }),
        }
    }
}

/// Cache state of one (source, table) pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PairResult {
    #[default]
    NotLoaded,
    Loaded(Vec<Record>),
    Error(String),
}

impl PairResult {
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            PairResult::Loaded(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PairResult::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PairResult::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

static NOT_LOADED: PairResult = PairResult::NotLoaded;

/// What a renderer needs for the current pair.
#[derive(Clone, Copy, Debug)]
pub struct PairView<'a> {
    pub source_id: &'a str,
    pub season: Option<u32>,
    pub source_index: usize,
    pub source_count: usize,
    pub table_index: usize,
    /// `None` until the source has been probed successfully.
    pub table_count: Option<usize>,
    pub accepted: bool,
    pub result: &'a PairResult,
}

/// Navigation cursor, per-pair cache and accepted set for one review run.
///
/// Pages are fetched once per source and kept; a failed fetch keeps nothing,
/// so the next visit fetches again. Per-source table counts come from probing
/// the page, never from how many pairs happen to be cached.
pub struct Session<F: Fetch> {
    sources: Vec<SourceEntry>,
    fetcher: F,
    extract: ExtractOptions,
    schema: EntitySchema,

    source_index: usize,
    table_index: usize,

    pages: HashMap<usize, String>,
    table_counts: HashMap<usize, usize>,
    cache: HashMap<(usize, usize), PairResult>,
    accepted: AcceptedSet,
}

impl<F: Fetch> Session<F> {
    /// No I/O happens here; `show()` loads the first pair.
    pub fn new(
        sources: Vec<SourceEntry>,
        fetcher: F,
        extract: ExtractOptions,
        schema: EntitySchema,
    ) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::NoSources);
        }
        Ok(Self {
            sources,
            fetcher,
            extract,
            schema,
            source_index: 0,
            table_index: 0,
            pages: HashMap::new(),
            table_counts: HashMap::new(),
            cache: HashMap::new(),
            accepted: AcceptedSet::new(),
        })
    }

    /* ---------- commands ---------- */

    pub fn apply(&mut self, cmd: Command) -> Flow {
        logd!("Session: {:?} at ({}, {})", cmd, self.source_index, self.table_index);
        match cmd {
            Command::Quit => return Flow::Quit,
            Command::Accept => self.accept(),
            Command::Skip | Command::NextTable => self.next_table(),
            Command::PreviousTable => self.previous_table(),
            Command::NextSource => self.next_source(),
            Command::PreviousSource => self.previous_source(),
            Command::Show => self.show(),
        }
        Flow::Continue
    }

    pub fn next_table(&mut self) {
        self.step_table(1);
    }

    pub fn previous_table(&mut self) {
        self.step_table(-1);
    }

    pub fn next_source(&mut self) {
        self.step_source(1);
    }

    pub fn previous_source(&mut self) {
        self.step_source(-1);
    }

    /// Keep the current pair's records (if loaded), then move to the next table.
    pub fn accept(&mut self) {
        let key = self.cursor();
        if let Some(records) = self.cache.get(&key).and_then(PairResult::records) {
            let source_id = &self.sources[key.0].source_id;
            logf!("Accept: {} table {} ({} records)", source_id, key.1, records.len());
            self.accepted.add(source_id, key.1, records.to_vec());
        } else {
            logd!("Accept: ({}, {}) has nothing loaded", key.0, key.1);
        }
        self.step_table(1);
    }

    /// Load the current pair if it has never been loaded. Cursor unchanged.
    pub fn show(&mut self) {
        self.materialize(false);
    }

    /* ---------- reads ---------- */

    pub fn cursor(&self) -> (usize, usize) {
        (self.source_index, self.table_index)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Known table count of a source; `None` until probed.
    pub fn table_count(&self, source_index: usize) -> Option<usize> {
        self.table_counts.get(&source_index).copied()
    }

    pub fn pair(&self, source_index: usize, table_index: usize) -> &PairResult {
        self.cache.get(&(source_index, table_index)).unwrap_or(&NOT_LOADED)
    }

    pub fn accepted(&self) -> &AcceptedSet {
        &self.accepted
    }

    pub fn is_accepted(&self, source_index: usize, table_index: usize) -> bool {
        self.sources
            .get(source_index)
            .is_some_and(|s| self.accepted.contains(&s.source_id, table_index))
    }

    pub fn view(&self) -> PairView<'_> {
        let (s, t) = self.cursor();
        let entry = &self.sources[s];
        PairView {
            source_id: &entry.source_id,
            season: entry.season,
            source_index: s,
            source_count: self.sources.len(),
            table_index: t,
            table_count: self.table_count(s),
            accepted: self.accepted.contains(&entry.source_id, t),
            result: self.pair(s, t),
        }
    }

    /* ---------- internals ---------- */

    fn step_table(&mut self, delta: isize) {
        let s = self.source_index;
        match self.probe(s) {
            Ok(0) => self.table_index = 0,
            Ok(n) => {
                self.table_index = (self.table_index as isize + delta).rem_euclid(n as isize) as usize;
            }
            Err(e) => {
                loge!("Probe: {} failed: {}", self.sources[s].source_id, e);
                self.cache.insert((s, self.table_index), PairResult::Error(e.to_string()));
                return;
            }
        }
        self.materialize(true);
    }

    fn step_source(&mut self, delta: isize) {
        let n = self.sources.len() as isize;
        self.source_index = (self.source_index as isize + delta).rem_euclid(n) as usize;
        self.table_index = 0;
        self.materialize(true);
    }

    /// Load the current pair when it isn't cached. Errored pairs are retried
    /// only when `retry_errors` (arrival by navigation).
    fn materialize(&mut self, retry_errors: bool) {
        let key = self.cursor();
        let needs_load = match self.cache.get(&key) {
            None | Some(PairResult::NotLoaded) => true,
            Some(PairResult::Error(_)) => retry_errors,
            Some(PairResult::Loaded(_)) => false,
        };
        if !needs_load {
            return;
        }

        let result = match self.load(key.0, key.1) {
            Ok(records) => {
                logf!(
                    "Load: {} table {} → {} records",
                    self.sources[key.0].source_id,
                    key.1,
                    records.len()
                );
                PairResult::Loaded(records)
            }
            Err(e) => {
                loge!("Load: {} table {} failed: {}", self.sources[key.0].source_id, key.1, e);
                PairResult::Error(e.to_string())
            }
        };
        self.cache.insert(key, result);
    }

    /// Fetch (if needed), probe, extract, reshape.
    fn load(&mut self, source_index: usize, table_index: usize) -> Result<Vec<Record>> {
        self.ensure_page(source_index)?;

        let doc = Html::parse_document(&self.pages[&source_index]);
        if !self.table_counts.contains_key(&source_index) {
            self.note_count(source_index, &doc)?;
        }

        let raw = extract_table(&doc, table_index, &self.extract)?;
        Ok(reshape(&raw, self.sources[source_index].season, &self.schema))
    }

    /// Authoritative table count for a source, fetching the page if needed.
    fn probe(&mut self, source_index: usize) -> Result<usize> {
        if let Some(n) = self.table_counts.get(&source_index) {
            return Ok(*n);
        }
        self.ensure_page(source_index)?;
        let doc = Html::parse_document(&self.pages[&source_index]);
        self.note_count(source_index, &doc)
    }

    fn note_count(&mut self, source_index: usize, doc: &Html) -> Result<usize> {
        let count = count_tables(doc, &self.extract.table_selector)?;
        logd!("Probe: {} has {} tables", self.sources[source_index].source_id, count);
        self.table_counts.insert(source_index, count);
        Ok(count)
    }

    fn ensure_page(&mut self, source_index: usize) -> Result<()> {
        if self.pages.contains_key(&source_index) {
            return Ok(());
        }
        let source_id = &self.sources[source_index].source_id;
        let body = self.fetcher.fetch(source_id)?;
        logf!("Fetch: {} ({} bytes)", source_id, body.len());
        self.pages.insert(source_index, body);
        Ok(())
    }
}
