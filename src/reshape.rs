// src/reshape.rs
//
// Wide → long. One input row carries every entity's metrics as sibling
// columns; the output has one `Record` per (row, entity) where both of that
// entity's columns exist.

use std::collections::HashMap;

use crate::config::schema::EntitySchema;
use crate::core::sanitize::parse_currency;
use crate::data::{RawTable, Record};

/// Reshape an extracted table. Columns are found by header text, so the
/// same schema works across pages whose column order differs.
///
/// Tables from `extract_table` are rectangular. A ragged row is read up to
/// the shorter of it and the header; cells past that are not looked up.
pub fn reshape(table: &RawTable, season: Option<u32>, schema: &EntitySchema) -> Vec<Record> {
    let mut records = Vec::new();
    for row in &table.rows {
        // duplicate headers: later column wins
        let entry: HashMap<&str, &str> = table
            .headers
            .iter()
            .map(String::as_str)
            .zip(row.iter().map(String::as_str))
            .collect();

        let scalar = |name: &str| entry.get(name).map(|v| s!(*v));
        let episode = scalar(schema.scalars.episode.as_str());
        let title = scalar(schema.scalars.title.as_str());
        let air_date = scalar(schema.scalars.air_date.as_str());

        for ent in &schema.entities {
            let (Some(spent), Some(profit)) = (
                entry.get(ent.spent_column.as_str()),
                entry.get(ent.profit_column.as_str()),
            ) else {
                continue;
            };

            records.push(Record {
                season,
                episode: episode.clone(),
                title: title.clone(),
                air_date: air_date.clone(),
                entity: ent.name.clone(),
                spent: parse_currency(spent),
                profit: parse_currency(profit),
            });
        }
    }
    records
}
