// src/config/consts.rs

// Fetch
pub const USER_AGENT: &str = "wikitable_scrape/0.1";

// Extract
pub const DEFAULT_TABLE_SELECTOR: &str = "table.wikitable";
pub const NA_TEXT: &str = "N/A";
pub const NA_REPLACEMENT: &str = "0";

// Reshape: scalar headers read from every row
pub const EPISODE_HEADER: &str = "#";
pub const TITLE_HEADER: &str = "Title";
pub const AIR_DATE_HEADER: &str = "Air date";

// Reshape: entity columns are "<name><suffix>"
pub const SPENT_SUFFIX: &str = "\nSpent";
pub const PROFIT_SUFFIX: &str = "\nNet profit/loss";
pub const DEFAULT_ENTITIES: &[&str] = &[
    "Dave Hester",
    "Jarrod Schulz/Brandi Passante",
    "Darrell Sheets/Brandon Sheets",
    "Barry Weiss",
];

// Local state
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "accepted";
