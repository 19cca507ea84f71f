// src/config/schema.rs
//! Column schema for reshaping wide episode tables.
//!
//! A page lists one row per episode and, for every tracked entity, a pair of
//! sibling columns (money spent, net profit/loss). The schema names those
//! columns so the reshaper looks them up by header text rather than position.
//! New entities are a config change: add an entry here or in the JSON file
//! passed with `--schema`.
//!
//! ```json
//! {
//!   "scalars": { "episode": "#", "title": "Title", "air_date": "Air date" },
//!   "entities": [
//!     { "name": "Barry Weiss",
//!       "spent_column": "Barry Weiss\nSpent",
//!       "profit_column": "Barry Weiss\nNet profit/loss" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::{Error, Result};

/// Header names of the per-row scalar fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarColumns {
    pub episode: String,
    pub title: String,
    pub air_date: String,
}

impl Default for ScalarColumns {
    fn default() -> Self {
        Self {
            episode: s!(EPISODE_HEADER),
            title: s!(TITLE_HEADER),
            air_date: s!(AIR_DATE_HEADER),
        }
    }
}

/// One entity and the two headers holding its metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityColumns {
    pub name: String,
    pub spent_column: String,
    pub profit_column: String,
}

impl EntityColumns {
    pub fn with_suffixes(name: &str, spent_suffix: &str, profit_suffix: &str) -> Self {
        Self {
            name: s!(name),
            spent_column: join!(name, spent_suffix),
            profit_column: join!(name, profit_suffix),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    #[serde(default)]
    pub scalars: ScalarColumns,
    pub entities: Vec<EntityColumns>,
}

impl Default for EntitySchema {
    fn default() -> Self {
        Self::from_names(DEFAULT_ENTITIES, SPENT_SUFFIX, PROFIT_SUFFIX)
    }
}

impl EntitySchema {
    pub fn from_names<S: AsRef<str>>(names: &[S], spent_suffix: &str, profit_suffix: &str) -> Self {
        Self {
            scalars: ScalarColumns::default(),
            entities: names
                .iter()
                .map(|n| EntityColumns::with_suffixes(n.as_ref(), spent_suffix, profit_suffix))
                .collect(),
        }
    }

    /// Read a JSON schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(text)?;
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<()> {
        if self.entities.is_empty() {
            return Err(Error::Schema(s!("no entities listed")));
        }
        for e in &self.entities {
            if e.name.trim().is_empty() {
                return Err(Error::Schema(s!("entity with empty name")));
            }
            if e.spent_column == e.profit_column {
                return Err(Error::Schema(format!(
                    "{}: spent and profit columns are both `{}`",
                    e.name, e.spent_column
                )));
            }
        }
        Ok(())
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }
}
