// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{DEFAULT_TABLE_SELECTOR, LOG_FILE};
use crate::config::options::{AppOptions, ExportFormat, RowPolicy};
use crate::config::schema::EntitySchema;
use crate::core::net::{Fetch, SourceFetcher};
use crate::error::Result;
use crate::session::{Command, Flow, KEY_HELP, Session, SourceEntry};
use crate::{file, render};

/// Review wiki tables page by page and keep the ones worth keeping.
#[derive(Parser, Debug, Clone)]
#[command(name = "wikitable_scrape", version, about)]
pub struct Args {
    /// Pages to review: http(s) URLs or saved HTML files
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Season per source, comma separated ("-" for none). Inferred from trailing digits when omitted.
    #[arg(long, value_delimiter = ',', value_parser = parse_season)]
    pub seasons: Option<Vec<SeasonArg>>,

    /// JSON entity schema (entity name → spent/profit column headers)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// CSS selector for candidate tables
    #[arg(long, default_value = DEFAULT_TABLE_SELECTOR)]
    pub selector: String,

    /// Drop rows whose cell count doesn't match the header instead of failing the table
    #[arg(long)]
    pub permissive: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Where to write accepted records
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Export format: csv, tsv or json
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Leave the header line out of CSV/TSV exports
    #[arg(long)]
    pub no_headers: bool,

    /// Log file
    #[arg(long, default_value = LOG_FILE)]
    pub log: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonArg(pub Option<u32>);

fn parse_season(s: &str) -> std::result::Result<SeasonArg, String> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return Ok(SeasonArg(None));
    }
    s.parse().map(|n| SeasonArg(Some(n))).map_err(|_| format!("not a season number: {s}"))
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown format: {s} (csv, tsv, json)"))
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.timeout = self.timeout.map(Duration::from_secs);
        opts.extract.table_selector = self.selector.clone();
        opts.extract.row_policy = if self.permissive { RowPolicy::Permissive } else { RowPolicy::Strict };
        opts.export.format = self.format;
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }

    pub fn entity_schema(&self) -> Result<EntitySchema> {
        match &self.schema {
            Some(path) => EntitySchema::load(path),
            None => Ok(EntitySchema::default()),
        }
    }

    pub fn source_entries(&self) -> Result<Vec<SourceEntry>> {
        let seasons: Option<Vec<Option<u32>>> =
            self.seasons.as_ref().map(|v| v.iter().map(|s| s.0).collect());
        SourceEntry::from_ids(&self.sources, seasons.as_deref())
    }
}

/// Session over the real transports, configured from the command line.
pub fn build_session(args: &Args, opts: &AppOptions) -> Result<Session<SourceFetcher>> {
    let schema = args.entity_schema()?;
    logd!("Init: entities {:?}", schema.entity_names().collect::<Vec<_>>());

    let fetcher = SourceFetcher::new(&opts.fetch)?;
    let session = Session::new(args.source_entries()?, fetcher, opts.extract.clone(), schema)?;
    logf!("Init: {} sources, selector `{}`", session.source_count(), opts.extract.table_selector);
    Ok(session)
}

pub fn help_line() -> String {
    let keys: Vec<String> = KEY_HELP.iter().map(|(k, what)| format!("{k}={what}")).collect();
    join!("Keys: ", &keys.join("  "))
}

/// Line-driven review: every non-blank character of every input line is one key.
/// Stops on `q` or end of input.
pub fn review<F, R, W>(session: &mut Session<F>, input: R, out: &mut W) -> io::Result<()>
where
    F: Fetch,
    R: BufRead,
    W: Write,
{
    session.show();
    writeln!(out, "{}\n\n{}", render::screen(&session.view()), help_line())?;

    for line in input.lines() {
        let line = line?;
        for key in line.chars().filter(|c| !c.is_whitespace()) {
            let Some(cmd) = Command::from_key(key) else {
                writeln!(out, "Unknown key `{key}`. {}", help_line())?;
                continue;
            };
            if session.apply(cmd) == Flow::Quit {
                return Ok(());
            }
            writeln!(out, "\n{}", render::screen(&session.view()))?;
        }
        out.flush()?;
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(&args.log);
    let opts = args.options();
    let mut session = build_session(&args, &opts)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    review(&mut session, stdin.lock(), &mut stdout)?;

    let accepted = session.accepted();
    writeln!(
        stdout,
        "\nAccepted {} tables ({} records)",
        accepted.len(),
        accepted.record_count()
    )?;

    if args.out.is_some() {
        let path = file::export_accepted(&opts.export, accepted)?;
        writeln!(stdout, "Wrote {}", path.display())?;
    }
    Ok(())
}
