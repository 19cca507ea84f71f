// src/core/net.rs
//
// Page fetching. The session only sees the `Fetch` trait; which transport
// answers is decided by the front end.

use std::fs;
use std::path::Path;

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::{Error, Result};

/// Turns a source id into an HTML document body. Blocking.
pub trait Fetch {
    fn fetch(&self, source_id: &str) -> Result<String>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, source_id: &str) -> Result<String> {
        self(source_id)
    }
}

/// HTTP(S) GET with a shared blocking client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout)
            .build()
            .map_err(|e| Error::fetch("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, source_id: &str) -> Result<String> {
        let body = self
            .client
            .get(source_id)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| Error::fetch(source_id, e))?;
        logd!("Fetch: GET {source_id} → {} bytes", body.len());
        Ok(body)
    }
}

/// Reads saved pages from disk. Source ids are file paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, source_id: &str) -> Result<String> {
        let path = source_id.strip_prefix("file://").unwrap_or(source_id);
        let body = fs::read_to_string(Path::new(path)).map_err(|e| Error::fetch(source_id, e))?;
        logd!("Fetch: read {path} → {} bytes", body.len());
        Ok(body)
    }
}

/// `http://` / `https://` ids go to the network, everything else to disk.
pub struct SourceFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl SourceFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        Ok(Self { http: HttpFetcher::new(opts)?, file: FileFetcher })
    }
}

pub fn is_remote(source_id: &str) -> bool {
    let lc = source_id.trim_start().to_ascii_lowercase();
    lc.starts_with("http://") || lc.starts_with("https://")
}

impl Fetch for SourceFetcher {
    fn fetch(&self, source_id: &str) -> Result<String> {
        if is_remote(source_id) {
            self.http.fetch(source_id)
        } else {
            self.file.fetch(source_id)
        }
    }
}
