// src/session/accepted.rs
use std::collections::BTreeMap;

use crate::data::Record;

/// Kept record sets, by source id then table index.
/// Re-accepting a pair replaces its records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptedSet {
    by_source: BTreeMap<String, BTreeMap<usize, Vec<Record>>>,
}

impl AcceptedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, source_id: &str, table_index: usize, records: Vec<Record>) {
        self.by_source
            .entry(s!(source_id))
            .or_default()
            .insert(table_index, records);
    }

    pub fn contains(&self, source_id: &str, table_index: usize) -> bool {
        self.by_source
            .get(source_id)
            .is_some_and(|t| t.contains_key(&table_index))
    }

    pub fn get(&self, source_id: &str, table_index: usize) -> Option<&[Record]> {
        self.by_source
            .get(source_id)
            .and_then(|t| t.get(&table_index))
            .map(Vec::as_slice)
    }

    /// Number of accepted pairs.
    pub fn len(&self) -> usize {
        self.by_source.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total records across all accepted pairs.
    pub fn record_count(&self) -> usize {
        self.iter().map(|(_, _, recs)| recs.len()).sum()
    }

    /// (source id, table index, records), ordered by source id then table.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, &[Record])> {
        self.by_source.iter().flat_map(|(src, tables)| {
            tables
                .iter()
                .map(move |(ix, recs)| (src.as_str(), *ix, recs.as_slice()))
        })
    }
}
